//! Global CSS styles for GridLens.
//!
//! Class names match the ones emitted by the components and by
//! `gridlens-core` (`TitleColor::class`, `PillType::class`).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #ffffff;
  --bg-card: #f5f5f5;
  --bg-outage: rgba(180, 83, 9, 0.2);
  --border: #e5e5e5;
  --text-primary: #171717;
  --text-secondary: #525252;
  --amber: #b45309;
  --emerald: #065f46;
  --warning-bg: #fef3c7;
  --warning-text: #92400e;
  --default-bg: #e5e5e5;
  --success-bg: #d1fae5;
  --font-sans: 'Inter', system-ui, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --transition-fast: 150ms ease;
}

@media (prefers-color-scheme: dark) {
  :root {
    --bg: #111827;
    --bg-card: #1f2937;
    --bg-outage: rgba(245, 158, 11, 0.2);
    --border: #374151;
    --text-primary: #f5f5f5;
    --text-secondary: #a3a3a3;
    --amber: #f59e0b;
    --emerald: #10b981;
  }
}

*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.5;
}

/* === Zone panel === */
.zone-panel { padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
.zone-panel__nav { display: flex; gap: 0.5rem; flex-wrap: wrap; }
.zone-tab { padding: 0.25rem 0.75rem; border: 1px solid var(--border); border-radius: 999px; color: var(--text-secondary); text-decoration: none; font-size: var(--text-sm); }
.zone-tab.selected { border-color: var(--emerald); color: var(--emerald); }
.zone-panel__title { font-size: 1.5rem; font-weight: 700; }
.zone-panel__hovered { font-size: var(--text-xs); color: var(--text-secondary); min-height: 1rem; }

/* === Estimation card === */
.estimation-card { width: 100%; border-radius: 0.5rem; padding: 0.375rem 0.75rem; background: var(--bg-card); border: 1px solid var(--border); transition: all var(--transition-fast); }
.estimation-card--outage { background: var(--bg-outage); }
.estimation-card__text { font-size: var(--text-sm); color: var(--text-secondary); }
.estimation-card__link { font-size: var(--text-sm); font-weight: 600; color: var(--text-primary); text-decoration: underline; }
.card-icon { width: 16px; height: 16px; background-position: center; background-repeat: no-repeat; }
.text-amber-700 { color: var(--amber); }
.text-black { color: var(--text-primary); }

/* === Accordion === */
.accordion__header { display: flex; align-items: center; gap: 0.5rem; width: 100%; background: none; border: none; cursor: pointer; padding: 0.25rem 0; text-align: left; }
.accordion__title { font-weight: 600; font-size: var(--text-sm); flex: 1; }
.accordion__body { padding-bottom: 0.5rem; display: flex; flex-direction: column; gap: 0.5rem; }

/* === Badge === */
.badge { display: inline-flex; align-items: center; gap: 0.25rem; padding: 0 0.5rem; border-radius: 999px; font-size: var(--text-xs); font-weight: 600; }
.badge--default { background: var(--default-bg); }
.badge--warning { background: var(--warning-bg); color: var(--warning-text); }
.badge--success { background: var(--success-bg); }
.badge__icon { width: 12px; height: 12px; }

/* === Zone message === */
.zone-message { display: inline; overflow: hidden; }
.zone-message__link { font-weight: 600; color: var(--text-primary); text-decoration: underline; padding-left: 0.25rem; }

/* === Feedback card === */
.feedback-card { margin-top: 0.5rem; padding: 0.75rem; border-radius: 0.5rem; border: 1px solid var(--border); display: flex; flex-direction: column; gap: 0.5rem; }
.feedback-card__header { display: flex; justify-content: space-between; align-items: center; }
.feedback-card__subtitle { font-size: var(--text-xs); color: var(--text-secondary); }
.feedback-card__scores { display: flex; gap: 0.25rem; }
.feedback-card__input { width: 100%; min-height: 4rem; font-family: inherit; padding: 0.5rem; border: 1px solid var(--border); border-radius: 0.25rem; }
.btn-primary { padding: 0.25rem 1rem; border-radius: 999px; background: var(--emerald); color: #fff; border: none; cursor: pointer; }
.btn-score { width: 2rem; height: 2rem; border-radius: 50%; border: 1px solid var(--border); background: none; cursor: pointer; }
.btn-score.selected { background: var(--emerald); color: #fff; }
.feedback-card__scale { display: flex; justify-content: space-between; font-size: var(--text-sm); color: var(--text-secondary); }
.icon-btn { background: none; border: none; cursor: pointer; font-size: 1.25rem; color: var(--text-secondary); }

/* === Data sources === */
.data-sources { display: flex; flex-direction: column; padding: 0.5rem 0; }
.data-sources__header { display: flex; align-items: center; gap: 0.25rem; padding-bottom: 0.5rem; }
.data-sources__title { font-weight: 600; }
.data-sources__info { color: var(--emerald); cursor: help; }
.data-sources__list { display: flex; flex-direction: column; gap: 0.5rem; padding-left: 1.25rem; font-size: var(--text-sm); }
.data-sources__modes { display: inline-flex; gap: 0.25rem; padding-left: 0.375rem; }
.production-mode { font-size: var(--text-xs); color: var(--text-secondary); }

/* === Tooltip === */
.tooltip-trigger { position: relative; display: inline-flex; }
.tooltip { position: absolute; z-index: 50; min-width: 16rem; padding: 0.75rem; border-radius: 0.75rem; background: var(--bg-card); border: 1px solid var(--border); font-size: var(--text-sm); }
.tooltip--bottom { top: 100%; left: 0; }
.tooltip--top { bottom: 100%; left: 0; }
.tooltip-overlay { position: fixed; inset: 0; z-index: 50; display: flex; flex-direction: column; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.2); }
.tooltip-overlay__content { margin: 0 1.5rem; padding: 1rem; border-radius: 0.75rem; background: var(--bg-card); font-size: var(--text-sm); }

/* === Exchange chart === */
.exchange-chart { width: 100%; overflow: visible; }
.exchange-chart__legend { padding: 0.5rem 0; font-size: var(--text-xs); color: var(--text-secondary); }
.exchange-chart__capacity { fill: rgba(0, 0, 0, 0.1); }
.exchange-chart__zone { font-size: 10px; fill: var(--text-secondary); }
.axis-line { stroke: var(--border); stroke-width: 1; }
.axis-label { font-size: 9px; fill: var(--text-secondary); text-anchor: middle; }
.exchange-chart__scale { padding-top: 1rem; }

/* === Legend === */
.legend-item__label { font-size: var(--text-sm); font-weight: 600; }
.legend-item__unit { font-weight: 400; color: var(--text-secondary); }
.colorbar__bar { height: 0.5rem; border-radius: 0.25rem; }
.colorbar__ticks { display: flex; justify-content: space-between; font-size: var(--text-xs); color: var(--text-secondary); }
"#;
