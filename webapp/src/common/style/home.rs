pub const HOME_STYLES: &str = r#"
/* Hero */
.hero {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-12);
  max-width: var(--container-width);
  margin: 0 auto;
}

.hero-text {
  flex: 1 1 480px;
}

.hero-tagline {
  display: inline-block;
  margin-bottom: var(--space-4);
  padding-bottom: var(--space-1);
  border-bottom: 2px solid var(--primary);
  color: var(--primary);
  font-size: 1.125rem;
  font-weight: 500;
}

.hero-title {
  margin-bottom: var(--space-6);
  font-size: clamp(2.5rem, 6vw, 3.75rem);
  font-weight: 700;
  line-height: 1.15;
  color: var(--text-primary);
}

.hero-name {
  display: block;
  margin-top: var(--space-2);
  color: var(--primary);
}

.role-line {
  display: block;
  margin-top: var(--space-2);
}

.role-label {
  color: var(--primary);
  animation: rise-in 0.5s var(--easing-standard);
}

.role-caret {
  display: inline-block;
  width: 3px;
  height: 1em;
  margin-left: 2px;
  vertical-align: text-bottom;
  background-color: var(--primary);
  animation: blink 1s step-end infinite;
}

.hero-intro {
  max-width: 640px;
  margin-bottom: var(--space-8);
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

/* Portrait */
.portrait {
  flex: 0 1 320px;
  position: relative;
  display: flex;
  justify-content: center;
}

.portrait-ring {
  width: 320px;
  height: 320px;
  padding: var(--space-4);
  border-radius: var(--radius-full);
  background-color: rgba(245, 158, 11, 0.15);
}

.portrait-ring-inner {
  width: 100%;
  height: 100%;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: rgba(245, 158, 11, 0.25);
}

.portrait img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-full);
  border: 4px solid var(--surface);
  box-shadow: var(--shadow-lg);
}

.portrait-badge {
  position: absolute;
  bottom: 0;
  right: 0;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  text-align: center;
}

.portrait-badge .badge-top {
  color: var(--primary);
  font-weight: 700;
}

.portrait-badge .badge-bottom {
  font-size: 0.75rem;
  color: var(--text-tertiary);
}
"#;
