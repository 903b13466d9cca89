//! Global CSS styles for the site.
//!
//! Light page with an emerald accent, rounded cards and a sticky blurred
//! header.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* EMERALD (Brand, Actions) */
  --emerald-50: #ecfdf5;
  --emerald-100: #d1fae5;
  --emerald-500: #10b981;
  --emerald-600: #059669;
  --emerald-700: #047857;

  /* SLATE (Text, Borders) */
  --slate-200: #e2e8f0;
  --slate-500: #64748b;
  --slate-600: #475569;
  --slate-700: #334155;
  --slate-800: #1e293b;
  --slate-900: #0f172a;

  /* SEMANTIC */
  --amber: #f59e0b;
  --white: #ffffff;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-5xl: 3rem;

  /* Radii */
  --radius: 0.75rem;
  --radius-2xl: 1rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  color: var(--slate-900);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* Anchored sections clear the sticky header */
section[id] {
  scroll-margin-top: 4.5rem;
}

.site {
  min-height: 100vh;
  background: linear-gradient(to bottom, var(--white), rgba(236, 253, 245, 0.3), var(--white));
}

.container {
  margin: 0 auto;
  max-width: 80rem;
  padding-left: 1rem;
  padding-right: 1rem;
}

.section {
  padding-top: 3.5rem;
  padding-bottom: 3.5rem;
}

.section--tight {
  padding-top: 1.5rem;
  padding-bottom: 1.5rem;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.025em;
}

.section-lead {
  margin-top: 0.75rem;
  color: var(--slate-700);
}

.fine-print {
  margin-top: 1rem;
  font-size: var(--text-xs);
  color: var(--slate-500);
}

/* === Utilities === */
.text-xs { font-size: var(--text-xs); }
.text-sm { font-size: var(--text-sm); line-height: 1.5rem; }
.text-base { font-size: var(--text-base); }
.text-xl { font-size: var(--text-xl); }
.muted { color: var(--slate-600); }
.accent { color: var(--emerald-700); }
.text-emerald { color: var(--emerald-600); }
.w-full { width: 100%; }
.pb-2 { padding-bottom: 0.5rem; }
.pt-6 { padding-top: 1.5rem; }
.rounded-2xl { border-radius: var(--radius-2xl); }

.stack > * + * {
  margin-top: 0.5rem;
}

/* === Grids === */
.grid {
  display: grid;
  gap: 1.5rem;
}

.grid--wide { gap: 3rem; align-items: start; }
.grid--compact { gap: 1rem; }

@media (min-width: 768px) {
  .grid--2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .grid--3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

/* === Button === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: var(--radius);
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 500;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-default {
  background: var(--emerald-600);
  border: 1px solid var(--emerald-600);
  color: var(--white);
}

.btn-default:hover {
  background: var(--emerald-700);
}

.btn-outline {
  background: transparent;
  border: 1px solid var(--slate-200);
  color: var(--slate-900);
}

.btn-outline:hover {
  border-color: var(--emerald-500);
  color: var(--emerald-700);
}

/* Navigational buttons: the link fills the styled wrapper */
span.btn {
  padding: 0;
}

.btn-slot {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
}

/* === Card === */
.card {
  position: relative;
  background: var(--white);
  border: 1px solid var(--slate-200);
  border-radius: var(--radius);
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
}

.card-header {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  padding: 1.5rem;
}

.card-title {
  font-weight: 600;
  line-height: 1.25;
  letter-spacing: -0.01em;
}

.card-content {
  padding: 0 1.5rem 1.5rem;
}

.card-content.pt-6 {
  padding-top: 1.5rem;
}

/* === Icons === */
.icon {
  display: inline-block;
  width: 1.25rem;
  text-align: center;
  line-height: 1;
}

.icon--trailing {
  margin-left: 0.25rem;
}

.title-with-icon,
.badge-line,
.check-line {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  backdrop-filter: blur(8px);
  background: rgba(255, 255, 255, 0.7);
  border-bottom: 1px solid var(--slate-200);
}

.site-header__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 0.75rem;
  padding-bottom: 0.75rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand__mark {
  display: grid;
  place-items: center;
  height: 2.25rem;
  width: 2.25rem;
  border-radius: var(--radius);
  background: var(--emerald-600);
  color: var(--white);
  font-weight: 700;
}

.brand__name {
  font-weight: 600;
  line-height: 1.25rem;
}

.brand__subtitle {
  font-size: var(--text-xs);
  color: var(--slate-600);
}

.site-nav {
  display: none;
  align-items: center;
  gap: 1.5rem;
  font-size: var(--text-sm);
}

.site-nav__link:hover {
  color: var(--emerald-700);
}

.site-header__cta {
  display: none;
}

@media (min-width: 768px) {
  .site-nav { display: flex; }
  .site-header__cta { display: inline-flex; }
}

/* === Hero === */
.hero {
  padding-top: 3.5rem;
  padding-bottom: 3.5rem;
}

.hero__grid {
  display: grid;
  gap: 2.5rem;
  align-items: center;
}

@media (min-width: 768px) {
  .hero__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

.hero__title {
  font-size: 2.25rem;
  font-weight: 700;
  letter-spacing: -0.025em;
  line-height: 1.1;
}

@media (min-width: 768px) {
  .hero__title { font-size: var(--text-5xl); }
}

.hero__lead {
  margin-top: 1.25rem;
  font-size: var(--text-lg);
  line-height: 1.75rem;
  color: var(--slate-700);
}

.hero__actions {
  margin-top: 1.5rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.hero__badges {
  margin-top: 1.5rem;
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: var(--text-sm);
  color: var(--slate-600);
}

.hero__highlights {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.fade-up {
  animation: fade-up 0.5s ease-out both;
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Services === */
.features {
  margin-top: 2rem;
  display: grid;
  gap: 1.5rem;
}

@media (min-width: 640px) {
  .features { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .tools { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem; }
}

.feature {
  display: flex;
  gap: 0.75rem;
}

.feature__icon {
  align-self: flex-start;
  border-radius: var(--radius);
  padding: 0.5rem;
  background: var(--emerald-50);
  border: 1px solid var(--emerald-100);
}

.feature__title {
  font-weight: 600;
  color: var(--slate-800);
}

.feature__desc {
  font-size: var(--text-sm);
  line-height: 1.5rem;
  color: var(--slate-600);
}

.tools { color: var(--slate-700); }

.tools__heading {
  font-weight: 500;
}

.tools__list {
  list-style: disc inside;
}

/* === Pricing === */
.tiers {
  margin-top: 2rem;
}

.tier-card--highlighted {
  border-color: var(--emerald-500);
  box-shadow: 0 0 0 2px var(--emerald-500), 0 20px 25px -5px rgba(15, 23, 42, 0.1);
}

.tier-card__badge {
  position: absolute;
  top: -0.75rem;
  left: 1rem;
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--emerald-600);
  color: var(--white);
  font-size: var(--text-xs);
}

.tier-card__title {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
}

.tier-card__name { font-size: var(--text-xl); }

.tier-card__price {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.tier-card__period {
  font-size: var(--text-sm);
  font-weight: 400;
  color: var(--slate-500);
}

.tier-card__tagline {
  font-size: var(--text-sm);
  line-height: 1.5rem;
  color: var(--slate-600);
}

.tier-card__benefits {
  list-style: none;
  font-size: var(--text-sm);
  color: var(--slate-700);
}

.tier-card__benefits > li + li {
  margin-top: 0.5rem;
}

.tier-card__cta {
  margin-top: 1.5rem;
}

/* === Testimonials === */
.stars {
  display: flex;
  gap: 0.25rem;
  color: var(--amber);
}

.quote {
  margin-top: 0.75rem;
  font-size: var(--text-sm);
  line-height: 1.5rem;
  color: var(--slate-700);
}

.attribution {
  margin-top: 1rem;
  font-size: var(--text-sm);
  font-weight: 500;
}

/* === FAQ === */
.faq {
  margin-top: 1.5rem;
  color: var(--slate-700);
}

.faq__question {
  font-weight: 600;
}

/* === Contact === */
.contact-details {
  margin-top: 1.5rem;
  color: var(--slate-700);
}

.contact-form > * + * {
  margin-top: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 500;
}

.input-field {
  margin-top: 0.25rem;
  width: 100%;
  border: 1px solid var(--slate-200);
  border-radius: var(--radius);
  padding: 0.5rem;
  font-family: inherit;
  font-size: var(--text-base);
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--emerald-500);
}

.textarea {
  min-height: 7rem;
  resize: vertical;
}

.confirmation {
  text-align: center;
  padding: 3rem 0;
}

.confirmation__badge {
  display: grid;
  place-items: center;
  margin: 0 auto;
  height: 3rem;
  width: 3rem;
  border-radius: 9999px;
  background: var(--emerald-100);
  color: var(--emerald-700);
  font-size: var(--text-2xl);
}

.confirmation__text {
  margin-top: 1rem;
  font-weight: 600;
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--slate-200);
}

.site-footer__inner {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-top: 2.5rem;
  padding-bottom: 2.5rem;
  font-size: var(--text-sm);
  color: var(--slate-600);
}

.site-footer__links {
  display: flex;
  align-items: center;
  gap: 1rem;
}

@media (min-width: 768px) {
  .site-footer__inner { flex-direction: row; }
}
"#;
