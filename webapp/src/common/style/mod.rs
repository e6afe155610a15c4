use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
  color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application shell */
.app-shell {
  display: flex;
  min-height: 100vh;
}

.app-sidebar {
  position: fixed;
  top: 0;
  left: 0;
  bottom: 0;
  z-index: 20;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  width: var(--sidebar-width);
  padding: var(--space-8) var(--space-6);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
  transform: translateX(-100%);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.app-sidebar.open {
  transform: translateX(0);
}

@media (min-width: 768px) {
  .app-sidebar {
    transform: none;
  }

  .app-main {
    margin-left: var(--sidebar-width);
  }
}

.app-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  width: 100%;
}

.app-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  padding: 0 var(--space-4);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

@media (min-width: 768px) {
  .hamburger {
    display: none;
  }
}

.hamburger {
  border: none;
  background: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 600;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.logo-mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: #FFFFFF;
  font-weight: 700;
}

.nav-links {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-raised);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(245, 158, 11, 0.1);
}

.theme-toggle {
  margin-top: auto;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background: none;
  color: var(--text-primary);
  cursor: pointer;
}

.theme-toggle:hover {
  border-color: var(--border-focus);
}

.app-footer {
  margin-top: auto;
  padding: var(--space-4);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

/* Shared page scaffolding */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
}

.page-heading {
  margin-bottom: var(--space-4);
  font-size: clamp(2.25rem, 5vw, 3rem);
  font-weight: 700;
  color: var(--text-primary);
}

.page-heading .accent {
  color: var(--primary);
}

.page-subheading {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-12);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.rule {
  width: 48px;
  height: 4px;
  background-color: var(--primary);
}

.section-title {
  margin-bottom: var(--space-6);
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.prose p {
  margin-bottom: var(--space-4);
  color: var(--text-secondary);
}

.prose .highlight {
  color: var(--primary);
  font-weight: 600;
}

/* About page */
.detail-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-4);
}

.detail-grid .label {
  margin-right: var(--space-2);
  font-weight: 500;
  color: var(--text-primary);
}

.detail-grid .value {
  color: var(--text-secondary);
}

.skills-strip {
  overflow: hidden;
  padding: var(--space-6);
  border-radius: var(--radius-md);
  background-color: var(--surface);
}

.skills-track {
  display: flex;
  gap: var(--space-4);
  width: max-content;
  animation: marquee 30s linear infinite;
}

.skill-pill {
  flex-shrink: 0;
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  white-space: nowrap;
}

.education-card {
  padding: var(--space-6);
  margin-bottom: var(--space-4);
  border-left: 4px solid var(--primary);
  border-radius: var(--radius-md);
  background-color: var(--surface);
}

.education-card .years {
  font-size: 0.875rem;
  color: var(--primary);
}

.education-card .institution {
  color: var(--text-secondary);
}

/* Projects and certificate grids */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.project-card {
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.project-card:hover {
  transform: scale(1.02);
}

.project-card .thumb {
  position: relative;
  height: 200px;
  overflow: hidden;
}

.project-card .thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-card .body {
  padding: var(--space-4);
}

.project-card .body p {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.tech-chips {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-2);
}

.tech-chip {
  padding: 2px var(--space-2);
  border-radius: var(--radius-sm);
  background-color: rgba(245, 158, 11, 0.12);
  color: var(--primary);
  font-size: 0.75rem;
  font-weight: 500;
}

.cert-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-6);
}

.demo-frame {
  width: 100%;
  height: 350px;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.modal-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
}

/* Photo gallery */
.photo-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-6);
}

.photo-card {
  position: relative;
  cursor: pointer;
}

.photo-card .frame {
  position: relative;
  aspect-ratio: 1 / 1;
  overflow: hidden;
}

.photo-card .frame img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.photo-card:hover .frame img {
  transform: scale(1.1);
}

.photo-badge {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: rgba(245, 158, 11, 0.8);
  color: #FFFFFF;
  font-size: 0.75rem;
  font-weight: 500;
}

.photo-overlay {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
  color: #FFFFFF;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.photo-card:hover .photo-overlay {
  opacity: 1;
}

.stat-button {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  border: none;
  background: none;
  color: rgba(255, 255, 255, 0.85);
  font-size: 0.875rem;
  cursor: pointer;
}

.stat-button:hover {
  color: #FFFFFF;
}

.stat-button.liked {
  color: var(--like);
}

.photo-card .caption {
  padding: var(--space-4);
  font-weight: 700;
  color: var(--text-primary);
}

/* Lightbox */
.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 10;
  width: 48px;
  height: 48px;
  display: flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: var(--radius-full);
  background-color: rgba(0, 0, 0, 0.5);
  color: #FFFFFF;
  font-size: 1.25rem;
  cursor: pointer;
}

.lightbox-nav:hover {
  background-color: rgba(0, 0, 0, 0.7);
}

.lightbox-nav.prev { left: var(--space-4); }
.lightbox-nav.next { right: var(--space-4); }

.lightbox-image {
  width: 100%;
  max-height: 70vh;
  object-fit: cover;
}

.lightbox-counter {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: rgba(0, 0, 0, 0.5);
  color: #FFFFFF;
  font-size: 0.875rem;
}

.lightbox-body {
  padding: var(--space-8);
}

.lightbox-meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-6);
  margin-top: var(--space-6);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.lightbox-meta .group {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-6);
}

.contact-card {
  padding: var(--space-6);
  border-radius: var(--radius-md);
  background-color: var(--surface);
}

.social-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

/* Startup loader */
.page-loader {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  min-height: 100vh;
}

.spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--surface-raised);
  border-top-color: var(--primary);
  border-radius: var(--radius-full);
  animation: spin 0.8s linear infinite;
}
"#,
);
