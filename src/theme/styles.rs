//! Global CSS styles for Consent Gate.
//!
//! Light palette by default; `[data-theme="dark"]` on the root element swaps
//! the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app-root {
  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f9fafb;
  --surface-sunken: #f3f4f6;
  --border: #e5e7eb;

  /* ACCENT */
  --accent: #1f6d78;
  --accent-hover: #155e68;
  --accent-glow: rgba(31, 109, 120, 0.2);

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* SKELETON */
  --skeleton: #e5e7eb;

  /* SEMANTIC */
  --success: #16a34a;
  --danger: #dc2626;
  --disabled: #d1d5db;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

.app-root[data-theme="dark"] {
  --surface: #1f2937;
  --surface-muted: #111827;
  --surface-sunken: #374151;
  --border: #374151;
  --text-primary: #f9fafb;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --skeleton: #374151;
  --disabled: #4b5563;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  min-height: 100vh;
}

.app-root {
  min-height: 100vh;
  background: var(--surface-muted);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* === Page === */
.home-page {
  max-width: 960px;
  margin: 0 auto;
  padding: 1.5rem;
}

.home-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 2rem;
}

.page-title {
  font-size: 1.5rem;
  font-weight: 900;
  letter-spacing: -0.02em;
}

.section-title {
  font-size: 1.125rem;
  font-weight: 800;
  margin-bottom: 0.5rem;
}

.consent-summary {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 1.5rem;
  padding: 1.5rem;
}

.consent-status {
  font-size: 0.875rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.status-pending { color: var(--text-muted); }
.status-approved { color: var(--success); }
.status-declined { color: var(--danger); }

/* === Buttons === */
.btn-primary,
.btn-secondary {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem 1.5rem;
  border-radius: 0.75rem;
  font-family: var(--font-sans);
  font-size: 0.75rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: none;
  color: #ffffff;
  box-shadow: 0 10px 15px var(--accent-glow);
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent-hover);
}

.btn-primary:active:not(:disabled) {
  transform: scale(0.95);
}

.btn-primary:disabled {
  background: var(--disabled);
  box-shadow: none;
  cursor: not-allowed;
  opacity: 0.7;
}

.btn-secondary {
  background: var(--surface);
  border: 2px solid var(--border);
  color: var(--text-secondary);
}

.btn-secondary:hover {
  background: var(--surface-sunken);
  color: var(--text-primary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 9999px;
  background: var(--surface-sunken);
  color: var(--text-muted);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Theme Toggle === */
.theme-toggle {
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 9999px;
  background: transparent;
  color: var(--text-secondary);
  font-size: 1.25rem;
  cursor: pointer;
  transition: background var(--transition-normal);
}

.theme-toggle:hover {
  background: var(--surface-sunken);
}

.theme-icon {
  display: inline-block;
  transition: transform 500ms ease;
}

.theme-toggle[data-mode="dark"] .theme-icon {
  transform: rotate(-20deg);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(12px);
  z-index: 200;
  animation: fade-in 300ms ease-out;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 900;
  letter-spacing: -0.02em;
}

/* === Consent Modal === */
.consent-modal {
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 42rem;
  height: 80vh;
  overflow: hidden;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 1.5rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.consent-header {
  flex-shrink: 0;
  padding: 1.5rem;
  border-bottom: 1px solid var(--border);
}

.consent-subtitle {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.consent-body {
  flex: 1;
  overflow-y: auto;
  padding: 2rem;
  background: var(--surface-muted);
}

.consent-prose {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.consent-prose p {
  margin-bottom: 0.75rem;
}

.consent-lead {
  font-weight: 700;
  color: var(--text-primary);
}

.consent-section-title {
  margin: 1.5rem 0 0.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.consent-list {
  margin-top: 0.5rem;
  padding-left: 1.25rem;
  list-style: disc;
}

.consent-list li + li {
  margin-top: 0.25rem;
}

.consent-actions {
  display: flex;
  gap: 1rem;
  flex-shrink: 0;
  padding: 1.5rem;
  border-top: 1px solid var(--border);
  background: var(--surface-muted);
}

.consent-cancel { flex: 1; }
.consent-approve { flex: 2; }

/* === Promo Screen === */
.promo-screen {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  background: var(--surface);
  z-index: 100;
  animation: slide-up 300ms ease-out;
}

@keyframes slide-up {
  from { transform: translateY(100%); }
  to { transform: translateY(0); }
}

.promo-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.promo-content {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  text-align: center;
}

.promo-title {
  margin-bottom: 1rem;
  font-size: 1.875rem;
  font-weight: 900;
  line-height: 1.2;
}

.promo-highlight {
  color: var(--accent);
}

.promo-body {
  max-width: 20rem;
  margin-bottom: 2.5rem;
  font-size: 1.125rem;
  color: var(--text-muted);
}

.promo-features {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  width: 100%;
  max-width: 20rem;
  margin-bottom: 2.5rem;
  list-style: none;
  text-align: left;
}

.promo-features li {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.promo-check {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  background: #dcfce7;
  color: var(--success);
  font-size: 0.75rem;
}

.promo-cta {
  width: 100%;
  max-width: 20rem;
  font-size: 1.125rem;
}

/* === Skeletons === */
.skeleton {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

.skeleton-block {
  background: var(--skeleton);
  border-radius: 0.25rem;
}

.home-loading {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.skeleton-card {
  display: flex;
  gap: 2rem;
  padding: 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 2.5rem;
}

.skeleton-photo {
  flex-shrink: 0;
  width: 6rem;
  height: 7rem;
  border-radius: 1.75rem;
}

.skeleton-lines {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 0.25rem 0;
}

.skeleton-line { height: 1rem; }
.skeleton-line.thin { height: 0.5rem; }
.w-3-4 { width: 75%; }
.w-1-2 { width: 50%; }

.skeleton-pills,
.skeleton-chips {
  display: flex;
  gap: 0.5rem;
}

.skeleton-pill {
  width: 4rem;
  height: 1.5rem;
  border-radius: 9999px;
}

.skeleton-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem;
}

.skeleton-avatar {
  flex-shrink: 0;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
}

.skeleton-stats {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.skeleton-stat-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem;
  background: var(--surface-muted);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
}

.skeleton-stat-label { width: 5rem; height: 0.75rem; }
.skeleton-stat-value { width: 2.5rem; height: 1rem; }

.skeleton-filters {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.skeleton-search {
  height: 2.5rem;
  border-radius: 9999px;
  background: var(--surface);
  border: 1px solid var(--border);
}

.skeleton-chip {
  flex-shrink: 0;
  width: 6rem;
  height: 2rem;
  border-radius: 9999px;
  background: var(--surface);
  border: 1px solid var(--border);
}

.home-sidebar {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}
"#;
