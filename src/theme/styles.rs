//! Global CSS styles for HP Fortress.
//!
//! Dark server-room palette. Custom properties here are also referenced by
//! the inline styles produced in `fortress_core` (menu layout, skip link).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-primary: #0b0f17;
  --bg-secondary: #121826;
  --bg-tertiary: #1a2233;
  --border-color: #263047;

  /* Accents */
  --accent-primary: #3b82f6;
  --accent-secondary: #06b6d4;
  --accent-gradient: linear-gradient(135deg, #3b82f6 0%, #06b6d4 100%);
  --success: #22c55e;
  --warning: #f59e0b;

  /* Text */
  --text-primary: #e6edf7;
  --text-secondary: rgba(230, 237, 247, 0.72);
  --text-muted: rgba(230, 237, 247, 0.48);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Spacing */
  --spacing-xs: 0.25rem;
  --spacing-sm: 0.5rem;
  --spacing-md: 1rem;
  --spacing-lg: 1.5rem;
  --spacing-xl: 3rem;

  --radius: 12px;
  --header-height: 80px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  background: var(--bg-primary);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

a {
  color: var(--accent-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

a:hover {
  color: var(--text-primary);
}

/* The page container owns scrolling so scroll events reach it */
.page-root {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  outline: none;
  scroll-behavior: smooth;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 100;
  height: var(--header-height);
  background: transparent;
  border-bottom: 1px solid transparent;
  transition: background var(--transition-normal), border-color var(--transition-normal),
    box-shadow var(--transition-normal);
}

.site-header.scrolled {
  background: rgba(11, 15, 23, 0.92);
  border-bottom-color: var(--border-color);
  box-shadow: 0 4px 24px rgba(0, 0, 0, 0.4);
  backdrop-filter: blur(10px);
}

.header-inner {
  position: relative;
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 var(--spacing-lg);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--spacing-sm);
  color: var(--text-primary);
  font-weight: 800;
  font-size: 1.25rem;
}

.logo-icon {
  font-size: 1.5rem;
}

.nav-links {
  display: flex;
  gap: var(--spacing-lg);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
}

.mobile-menu-toggle {
  display: none;
  flex-direction: column;
  gap: 6px;
  padding: var(--spacing-sm);
  background: none;
  border: none;
  cursor: pointer;
}

.mobile-menu-toggle span {
  display: block;
  width: 26px;
  height: 3px;
  background: var(--text-primary);
  border-radius: 2px;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

/* === Sections === */
main {
  display: block;
}

.section {
  max-width: 1200px;
  margin: 0 auto;
  padding: var(--spacing-xl) var(--spacing-lg);
}

.section-title {
  font-size: 2rem;
  margin-bottom: var(--spacing-lg);
  text-align: center;
}

/* === Hero === */
.hero {
  min-height: calc(100vh - var(--header-height));
  display: grid;
  grid-template-columns: 1.1fr 1fr;
  gap: var(--spacing-xl);
  align-items: center;
}

.eyebrow {
  color: var(--accent-secondary);
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.hero-title {
  font-size: 3.25rem;
  line-height: 1.1;
  margin: var(--spacing-md) 0;
}

.hero-title .accent {
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-text {
  color: var(--text-secondary);
  font-size: 1.125rem;
  margin-bottom: var(--spacing-lg);
}

.hero-actions {
  display: flex;
  gap: var(--spacing-md);
}

.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font-weight: 600;
}

.btn-primary {
  background: var(--accent-gradient);
  color: white;
}

.btn-ghost {
  border: 1px solid var(--border-color);
  color: var(--text-primary);
}

/* === Server Dashboard === */
.server-dashboard {
  background: var(--bg-secondary);
  border: 1px solid var(--border-color);
  border-radius: var(--radius);
  padding: var(--spacing-lg);
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.45);
  will-change: transform;
}

.dashboard-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--spacing-md);
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-muted);
}

.dashboard-clock {
  color: var(--accent-secondary);
}

.server-rack {
  display: flex;
  flex-direction: column;
  gap: var(--spacing-sm);
  margin-bottom: var(--spacing-lg);
}

.server-unit {
  display: flex;
  align-items: center;
  gap: var(--spacing-md);
  padding: var(--spacing-sm) var(--spacing-md);
  background: var(--bg-tertiary);
  border-radius: 6px;
  font-family: var(--font-mono);
  font-size: 0.875rem;
}

.unit-name {
  flex: 1;
}

.unit-state {
  color: var(--text-muted);
}

.unit-led {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--warning);
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.unit-led.active {
  background: var(--success);
  box-shadow: 0 0 8px var(--success);
}

.metrics {
  display: flex;
  flex-direction: column;
  gap: var(--spacing-md);
}

.metric-head {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  margin-bottom: var(--spacing-xs);
}

.metric-value {
  font-family: var(--font-mono);
  color: var(--accent-secondary);
}

.metric-bar {
  height: 8px;
  background: var(--bg-tertiary);
  border-radius: 4px;
  overflow: hidden;
}

.metric-fill {
  height: 100%;
  background: var(--accent-gradient);
  transition: width 1s ease;
}

/* === Cards === */
.feature-grid,
.arch-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--spacing-lg);
}

.feature-card,
.arch-card-modern,
.challenge-item,
.stat-box {
  background: var(--bg-secondary);
  border: 1px solid var(--border-color);
  border-radius: var(--radius);
  padding: var(--spacing-lg);
}

.feature-card:hover,
.arch-card-modern:hover {
  border-color: var(--accent-primary);
}

.card-icon {
  font-size: 2rem;
  margin-bottom: var(--spacing-sm);
}

.feature-card h3,
.arch-card-modern h3,
.challenge-item h3 {
  margin-bottom: var(--spacing-sm);
}

.feature-card p,
.arch-card-modern p,
.challenge-item p {
  color: var(--text-secondary);
}

/* === Stats === */
.stats-section {
  background: linear-gradient(180deg, transparent, rgba(59, 130, 246, 0.06), transparent);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--spacing-lg);
  text-align: center;
}

.stat-value {
  font-size: 2.5rem;
  font-weight: 800;
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.stat-label {
  color: var(--text-muted);
}

/* === Challenges === */
.challenge-list {
  display: flex;
  flex-direction: column;
  gap: var(--spacing-md);
}

/* === Code Blocks === */
.code-block {
  margin-bottom: var(--spacing-lg);
}

.code-title {
  font-size: 0.875rem;
  color: var(--text-muted);
  margin-bottom: var(--spacing-xs);
}

.code-block pre {
  position: relative;
  background: #05080d;
  border: 1px solid var(--border-color);
  border-radius: 8px;
  padding: var(--spacing-lg);
  overflow-x: auto;
  font-family: var(--font-mono);
  font-size: 0.875rem;
}

.copy-button {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.5rem 1rem;
  background: var(--accent-primary);
  color: white;
  border: none;
  border-radius: 6px;
  cursor: pointer;
  font-size: 0.875rem;
  transition: opacity 0.3s;
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--border-color);
  padding: var(--spacing-xl) var(--spacing-lg);
  text-align: center;
  color: var(--text-muted);
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: var(--spacing-lg);
  margin-top: var(--spacing-md);
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .mobile-menu-toggle {
    display: flex;
  }

  .hero {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: 2.25rem;
  }
}
"#;

/// Reveal transitions and the keyframes used by inline animations.
pub const INJECTED_STYLES: &str = r#"
.section {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.section.fade-in {
  opacity: 1;
  transform: translateY(0);
}

@keyframes slideDown {
  from {
    opacity: 0;
    transform: translateY(-20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes pulse {
  0%, 100% { transform: translate(-50%, -50%) scale(1); }
  50% { transform: translate(-50%, -50%) scale(1.05); }
}
"#;
