//! CSS styles for the citation chaining pages.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
:root {
    --fg: rgb(49, 51, 63);
    --muted: rgba(49, 51, 63, 0.7);
    --faint: rgba(49, 51, 63, 0.5);
    --border: rgba(49, 51, 63, 0.2);
    --border-strong: rgba(49, 51, 63, 0.45);
    --sidebar-bg: rgba(240, 242, 246, 0.5);
    --primary: #ff4b4b;
    --seed: #ff9800;
    --seed-bg: rgba(255, 243, 205, 0.5);
    --warn-bg: rgba(255, 243, 205, 0.8);
    --info-bg: rgba(28, 131, 225, 0.1);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: #fff;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
}

a { color: inherit; }

h1, h2, h3 { font-weight: 600; margin-top: 1em; margin-bottom: 0.5em; }
h1 { font-size: 2rem; }
h3 { font-size: 1.25rem; }

hr.divider { border: none; border-top: 1px solid var(--border); margin: 1rem 0; }

.caption { color: var(--muted); font-size: 0.875rem; }

/* Buttons and inputs */
.btn {
    display: inline-block;
    padding: 0.4rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: #fff;
    color: var(--fg);
    font-size: 0.95rem;
    text-decoration: none;
    text-align: center;
    cursor: pointer;
}
.btn:hover { border-color: var(--primary); color: var(--primary); }
.btn.primary { background: var(--primary); border-color: var(--primary); color: #fff; }
.btn.primary:hover { opacity: 0.9; color: #fff; }
.btn.block { display: block; width: 100%; }

input[type="text"] {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    font-size: 1rem;
}

/* Layout */
.columns { display: flex; gap: 2rem; align-items: flex-start; }
.main-col { flex: 3; min-width: 0; }
.history-col { flex: 1; min-width: 0; }

.topbar { display: flex; gap: 0.75rem; align-items: flex-end; }
.topbar .query-field { flex: 7.5; }
.topbar .query-field label { display: block; font-size: 0.875rem; margin-bottom: 0.25rem; }
.topbar .btn { flex: 1.25; }

/* Paper cards */
a.paper-card-link {
    display: block;
    color: inherit;
    text-decoration: none;
}
a.paper-card-link:hover .paper-card { border-color: var(--border-strong); }
a.paper-card-link:hover .paper-title { text-decoration: underline; }
.paper-card {
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 12px;
    margin-bottom: 10px;
}
.paper-title {
    font-size: 1.10rem;
    font-weight: 650;
    margin-bottom: 4px;
    line-height: 1.25;
}
.paper-meta {
    color: var(--muted);
    font-size: 0.9rem;
    margin-bottom: 8px;
}
.paper-snippet { margin-bottom: 8px; }

/* Keyword groups */
details.group {
    border: 1px solid var(--border);
    border-radius: 8px;
    margin-bottom: 0.75rem;
    padding: 0.5rem 0.75rem;
}
details.group > summary { cursor: pointer; font-weight: 500; padding: 0.25rem 0; }
details.group[open] > summary { margin-bottom: 0.5rem; }

.toggle { display: flex; gap: 0.5rem; align-items: center; margin-top: 1rem; }

/* History sidebar */
.history-sidebar {
    position: sticky;
    top: 1rem;
    max-height: calc(100vh - 2rem);
    overflow-y: auto;
    padding: 1rem;
    background-color: var(--sidebar-bg);
    border-radius: 8px;
    border: 1px solid rgba(49, 51, 63, 0.1);
}
.history-sidebar h3 { margin-top: 0; }
.history-item {
    padding: 0.5rem;
    margin-bottom: 0.5rem;
    background-color: white;
    border-radius: 4px;
    border: 1px solid rgba(49, 51, 63, 0.1);
    font-size: 0.85rem;
    cursor: pointer;
    transition: border-color 0.2s;
}
.history-item:hover { border-color: rgba(49, 51, 63, 0.3); }
.history-item.seed {
    background-color: var(--seed-bg);
    border-left: 3px solid var(--seed);
    cursor: default;
}
.history-step {
    color: var(--faint);
    font-size: 0.7rem;
    font-weight: 600;
    margin-bottom: 0.25rem;
}
.history-item.seed .history-step { color: var(--seed); }
.history-item-title {
    font-weight: 600;
    margin-bottom: 0.25rem;
    line-height: 1.2;
}
.history-item-meta {
    color: rgba(49, 51, 63, 0.6);
    font-size: 0.75rem;
}
a.history-link { text-decoration: none; color: inherit; }

/* Messages */
.message { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.message.warning { background: var(--warn-bg); }
.message.info { background: var(--info-bg); }

/* Landing */
.landing-wrap {
    max-width: 800px;
    margin: 0 auto;
    padding-top: 0.5rem;
}
.landing-wrap h1, .landing-wrap p { text-align: left; }
.landing-title { margin-bottom: 0.25rem; }
.landing-subtitle {
    margin-top: 0;
    margin-bottom: 1.25rem;
    color: rgba(49, 51, 63, 0.75);
}
.landing-form { display: flex; flex-direction: column; gap: 0.75rem; }
"#;
