use crate::plan::BRIGHT;
use crate::plan::DARK;
use crate::plan::MUTED;

/// The dashboard stylesheet, themed with the plan's palette.
pub fn dashboard_css() -> String {
    format!(
        r#"
    * {{ box-sizing: border-box; }}

    html, body {{
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        font-family: system-ui, sans-serif;
        background-color: {dark};
        color: #e6edf3;
    }}

    /* --- APP FRAME --- */
    .app-main-container {{
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        outline: none;
    }}

    .container {{
        flex: 1;
        display: flex;
        flex-direction: column;
        min-height: 0;
    }}

    header.app-header {{
        flex-shrink: 0;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0 1rem;
    }}

    /* --- NAVIGATION TABS --- */
    .menu-bar ul {{ display: flex; gap: 0.5rem; list-style: none; margin: 0; padding: 0; }}
    .menu-bar a {{ text-decoration: none; padding: 0.5rem; display: inline-block; }}
    .menu-bar a.disabled {{ color: {muted}; cursor: default; }}
    .menu-bar .shortcut {{ margin-left: 0.5rem; opacity: 0.7; }}
    .tab-menu ul {{ display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }}
    .tab-menu a {{ text-decoration: none; padding: 0.5rem 1rem; display: inline-block; }}
    .tab-menu a.active-tab {{
        color: {bright};
        border-radius: 10px 10px 0 0;
        border-top: 3px solid {bright};
    }}
    .tab-menu a:not(.active-tab) {{
        color: {muted};
        border-top: 3px solid transparent;
    }}

    /* --- CONTENT AREA --- */
    .content {{
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        min-height: 0;
        padding: 0 1rem;
    }}

    article {{
        flex: 1;
        display: flex;
        flex-direction: column;
        min-height: 0;
        padding: 1rem;
        border-radius: 8px;
        background-color: rgba(255, 255, 255, 0.04);
    }}

    .grid {{ flex: 1; display: grid; grid-template-columns: 280px 1fr; gap: 1rem; min-height: 0; }}

    .portfolio-header {{ display: flex; justify-content: space-between; align-items: center; }}

    .coin-list {{ overflow-y: auto; list-style: none; margin: 0; padding: 0; }}
    .coin-list li a {{
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.5rem;
        color: inherit;
        text-decoration: none;
        border-radius: 6px;
    }}
    .coin-list li a.selected {{ background-color: {bright}; }}

    .coin-icon {{ width: 32px; height: 32px; object-fit: contain; }}
    .coin-placeholder {{
        width: 32px; height: 32px;
        display: inline-flex; align-items: center; justify-content: center;
        border-radius: 50%;
        background-color: {muted};
        font-weight: bold;
    }}

    .coin-detail {{ display: flex; flex-direction: column; min-height: 0; overflow-y: auto; }}
    .coin-detail table {{ width: 100%; border-collapse: collapse; }}
    .coin-detail td {{ padding: 0.4rem; border-bottom: 1px solid rgba(255, 255, 255, 0.08); }}
    .muted {{ color: {muted}; }}

    button {{
        cursor: pointer;
        padding: 0.4rem 1rem;
        border-radius: 6px;
        border: 1px solid {bright};
        background-color: {bright};
        color: white;
    }}
    button.secondary {{ background-color: transparent; color: {bright}; }}

    dialog {{
        position: fixed;
        inset: 0;
        width: 100%;
        height: 100%;
        border: none;
        display: flex;
        align-items: center;
        justify-content: center;
        background-color: rgba(0, 0, 0, 0.6);
    }}
    dialog article {{ flex: 0 1 auto; max-width: 480px; min-width: 320px; background-color: {dark}; color: inherit; }}
    dialog header {{ display: flex; justify-content: space-between; align-items: center; }}
    dialog .close {{ color: {muted}; text-decoration: none; }}

    .spinner {{
        width: 48px; height: 48px;
        border: 4px solid {muted};
        border-top-color: {bright};
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }}
    @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
"#,
        bright = BRIGHT.css(),
        dark = DARK.css(),
        muted = MUTED.css(),
    )
}
