use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<Element>,
}

/// A dashed placeholder box for panes with nothing to show.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 2rem;
                text-align: center;
                border: 2px dashed rgba(255, 255, 255, 0.15);
                border-radius: 8px;
                margin: 1rem 0;
            ",
            class: "muted",

            if let Some(icon) = props.icon {
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                        opacity: 0.8;
                    ",
                    {icon}
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    style: "max-width: 400px; margin: 0 auto;",
                    "{desc}"
                }
            }
        }
    }
}
