pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border: none;
  border-radius: var(--radius-sm);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
  transform var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  transform: scale(1.05);
}

.btn:active {
  transform: scale(0.95);
}

.btn-primary {
  background-color: var(--primary);
  color: #FFFFFF;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-outline {
  background: none;
  border: 2px solid var(--primary);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--primary);
  color: #FFFFFF;
  text-decoration: none;
}

.btn-pill {
  border-radius: var(--radius-full);
}

/* Filter chips */
.chip-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.chip {
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--surface);
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.chip:hover {
  background-color: var(--surface-raised);
}

.chip.active {
  background-color: var(--primary);
  color: #FFFFFF;
  box-shadow: var(--shadow-md);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  overflow: hidden;
}

.skeleton {
  background: linear-gradient(90deg, var(--surface) 25%, var(--surface-raised) 50%, var(--surface) 75%);
  background-size: 200% 100%;
  animation: shimmer 1.5s infinite;
  border-radius: var(--radius-sm);
}

.image-placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--surface-raised);
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

/* Modal scaffolding */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: rgba(0, 0, 0, 0.85);
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.modal-card {
  position: relative;
  width: 100%;
  max-width: 960px;
  max-height: 90vh;
  overflow-y: auto;
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  animation: scale-in var(--transition-normal) var(--easing-standard);
}

.modal-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  z-index: 10;
  width: 44px;
  height: 44px;
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

.modal-close:hover {
  background-color: rgba(0, 0, 0, 0.7);
}

/* Certificate card accents */
.cert-card {
  position: relative;
  padding: var(--space-6);
  border-radius: var(--radius-md);
  color: #FFFFFF;
  box-shadow: var(--shadow-md);
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.cert-green { background-color: #22C55E; }
.cert-blue { background-color: #2563EB; }
.cert-purple { background-color: #9333EA; }
.cert-orange { background-color: #F97316; }

.cert-kind {
  align-self: flex-start;
  padding: 2px var(--space-2);
  border-radius: var(--radius-sm);
  background-color: rgba(255, 255, 255, 0.2);
  font-size: 0.75rem;
  letter-spacing: 0.05em;
}

.cert-link {
  color: #FFFFFF;
  font-weight: 600;
  text-decoration: underline;
}

/* Keyframes */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.85); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translateX(40px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slide-in-left {
  from { opacity: 0; transform: translateX(-40px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes shimmer {
  from { background-position: 200% 0; }
  to { background-position: -200% 0; }
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

@keyframes spin {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes marquee {
  from { transform: translateX(0); }
  to { transform: translateX(-50%); }
}

/* One-shot page entrances, keyed to the stored transition direction */
.page {
  min-height: calc(100vh - var(--header-height));
  padding: var(--space-16) var(--space-6);
}

.enter-fade {
  animation: fade-in 0.6s var(--easing-standard);
}

.enter-slide-right {
  animation: slide-in-right 0.6s var(--easing-standard);
}

.enter-slide-left {
  animation: slide-in-left 0.6s var(--easing-standard);
}

.rise {
  animation: rise-in 0.6s var(--easing-standard);
}
"#;
