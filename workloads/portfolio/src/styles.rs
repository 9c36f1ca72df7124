//! Inline stylesheet for the portfolio page.

pub const PORTFOLIO_STYLES: &str = r##"
:root {
    --bg: #0a0a0f;
    --text: #ffffff;
    --text-muted: rgba(255, 255, 255, 0.6);
    --text-faint: rgba(255, 255, 255, 0.4);
    --border: rgba(255, 255, 255, 0.1);
    --border-hover: rgba(255, 255, 255, 0.2);
    --surface: rgba(255, 255, 255, 0.05);
    --blue: #60a5fa;
    --gradient: linear-gradient(90deg, #3b82f6 0%, #a855f7 100%);
    --gradient-text: linear-gradient(90deg, #60a5fa 0%, #c084fc 50%, #67e8f9 100%);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    min-height: 100vh;
}

a { color: inherit; text-decoration: none; }

.container {
    max-width: 72rem;
    margin: 0 auto;
}

.gradient-text {
    background: var(--gradient-text);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* Background glows */
.backdrop {
    position: fixed;
    inset: 0;
    z-index: -1;
    overflow: hidden;
}

.glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(120px);
}

.glow-blue { top: -10rem; left: 50%; width: 700px; height: 700px; transform: translateX(-50%); background: rgba(59, 130, 246, 0.2); }
.glow-purple { top: 10rem; left: 15%; width: 520px; height: 520px; background: rgba(168, 85, 247, 0.2); }
.glow-cyan { top: 14rem; right: 10%; width: 520px; height: 520px; background: rgba(6, 182, 212, 0.1); }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid var(--border);
    background: rgba(0, 0, 0, 0.2);
    backdrop-filter: blur(8px);
}

.nav-container {
    max-width: 72rem;
    height: 4rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo {
    font-weight: 600;
    letter-spacing: 0.05em;
    color: var(--blue);
}

.nav-links {
    display: flex;
    gap: 1.5rem;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.7);
}

.nav-links a:hover { color: var(--text); }

/* Sections */
.section {
    position: relative;
    padding: 8rem 1.5rem;
}

.section-header { margin-bottom: 4rem; }

.contact .section-header,
.section-intro {
    text-align: center;
}

.section-intro {
    max-width: 36rem;
    margin: -2.5rem auto 4rem;
    color: rgba(255, 255, 255, 0.55);
}

.eyebrow {
    font-family: ui-monospace, monospace;
    font-size: 0.875rem;
    letter-spacing: 0.05em;
    color: var(--blue);
}

.section-header h2 {
    margin-top: 1rem;
    font-size: 3rem;
    font-weight: 700;
}

.muted { color: var(--text-faint); }

.card {
    position: relative;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--surface);
    padding: 1.5rem;
    transition: border-color 0.5s;
}

.card:hover { border-color: var(--border-hover); }

/* Entrance animations */
[data-entrance] {
    opacity: 0;
    transform: translate(var(--enter-x, 0px), var(--enter-y, 0px));
    transition:
        opacity var(--enter-duration, 600ms) ease var(--enter-delay, 0ms),
        transform var(--enter-duration, 600ms) ease var(--enter-delay, 0ms);
}

.is-revealed [data-entrance] {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    [data-entrance] { transition: none; }
}

/* Hero */
.hero {
    min-height: 92vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.hero-content { max-width: 56rem; }

.badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: var(--surface);
    font-size: 0.875rem;
    color: var(--text-muted);
}

.pulse {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 50%;
    background: #4ade80;
    animation: pulse 2s infinite;
}

.hero-title {
    margin-top: 2rem;
    font-size: 4.5rem;
    font-weight: 700;
    line-height: 1.15;
}

.hero-subtitle {
    max-width: 42rem;
    margin: 1.5rem auto 0;
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.65);
}

.hero-actions,
.hero-social {
    margin-top: 2.5rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    padding: 0.75rem 1.75rem;
    border-radius: 9999px;
    font-weight: 500;
    transition: background 0.2s, box-shadow 0.2s;
}

.btn-primary {
    background: var(--gradient);
    box-shadow: 0 10px 25px rgba(59, 130, 246, 0.2);
}

.btn-primary:hover { box-shadow: 0 10px 25px rgba(59, 130, 246, 0.35); }

.btn-primary .arrow { margin-left: 0.5rem; }

.btn-secondary {
    border: 1px solid var(--border-hover);
    background: var(--surface);
}

.btn-secondary:hover { background: var(--border); }

.btn-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.75rem;
    height: 2.75rem;
    border: 1px solid var(--border);
    border-radius: 50%;
    background: var(--surface);
    color: var(--text-muted);
    font-weight: 700;
}

.btn-icon:hover { color: var(--text); border-color: var(--border-hover); }

.scroll-hint {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.25em;
    color: var(--text-faint);
}

.scroll-arrow { animation: bob 1.6s infinite; }

/* About */
.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.portrait img {
    width: 100%;
    aspect-ratio: 4 / 5;
    object-fit: cover;
    border-radius: 1rem;
}

.about-content > * + * { margin-top: 1.5rem; }

.facts {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
}

.lead { font-size: 1.125rem; color: rgba(255, 255, 255, 0.7); }

.about-content p:not(.lead):not(.stat-value):not(.stat-label) { color: rgba(255, 255, 255, 0.5); }

.stats {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    padding-top: 2rem;
}

.stat {
    padding: 1rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--surface);
}

.stat-value { font-size: 1.875rem; font-weight: 700; }
.stat-label { margin-top: 0.25rem; font-size: 0.875rem; color: var(--text-faint); }

/* Skills */
.skill-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    margin-bottom: 5rem;
}

.card-icon {
    display: inline-flex;
    margin-bottom: 1rem;
    padding: 0.75rem;
    border-radius: 0.75rem;
    font-size: 1.5rem;
}

.skill-card h3 { margin-bottom: 1rem; font-size: 1.25rem; }

.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.chip {
    padding: 0.375rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: var(--surface);
    font-size: 0.875rem;
    color: var(--text-muted);
}

.accent-blue .card-icon, .accent-blue .timeline-dot { background: linear-gradient(90deg, #3b82f6, #06b6d4); }
.accent-purple .card-icon, .accent-purple .timeline-dot { background: linear-gradient(90deg, #a855f7, #ec4899); }
.accent-emerald .card-icon, .accent-emerald .timeline-dot { background: linear-gradient(90deg, #10b981, #14b8a6); }
.accent-orange .card-icon, .accent-orange .timeline-dot { background: linear-gradient(90deg, #f97316, #ef4444); }

.marquee {
    overflow: hidden;
    padding: 2rem 0;
    mask-image: linear-gradient(90deg, transparent, #000 10%, #000 90%, transparent);
}

.marquee-track {
    display: flex;
    width: max-content;
    animation: marquee var(--marquee-duration, 28s) linear infinite;
}

.marquee-group {
    display: flex;
    gap: 3rem;
    padding-right: 3rem;
    font-size: 2.25rem;
    font-weight: 700;
    color: rgba(255, 255, 255, 0.15);
    white-space: nowrap;
    pointer-events: none;
}

/* Experience */
.timeline {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 3rem;
}

.timeline::before {
    content: "";
    position: absolute;
    top: 0;
    bottom: 0;
    left: 50%;
    width: 1px;
    background: var(--border);
}

.timeline-item {
    position: relative;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.timeline-dot {
    position: absolute;
    top: 1.5rem;
    left: 50%;
    width: 1rem;
    height: 1rem;
    border: 2px solid var(--bg);
    border-radius: 50%;
    transform: translateX(-50%);
}

.timeline-item.left .timeline-date { text-align: right; padding-right: 3rem; }
.timeline-item.left .timeline-card { margin-left: 3rem; }
.timeline-item.right .timeline-date { order: 2; padding-left: 3rem; }
.timeline-item.right .timeline-card { order: 1; margin-right: 3rem; }

.period { font-family: ui-monospace, monospace; font-size: 0.875rem; color: rgba(255, 255, 255, 0.45); }
.timeline-date p { margin-top: 0.25rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.3); }

.timeline-card h3 { font-size: 1.25rem; }
.company { margin-bottom: 1rem; font-weight: 500; color: var(--blue); }

.timeline-card ul {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.timeline-card li::before { content: "• "; color: var(--blue); }

/* Projects */
.featured-projects {
    display: flex;
    flex-direction: column;
    gap: 6rem;
    margin-bottom: 5rem;
}

.featured-project {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    align-items: center;
}

.featured-project.reverse .project-media { order: 2; }
.featured-project.reverse .project-body { order: 1; text-align: right; }
.featured-project.reverse .tags,
.featured-project.reverse .project-links { justify-content: flex-end; }

.project-media { position: relative; }

.project-media img {
    width: 100%;
    aspect-ratio: 16 / 9;
    object-fit: cover;
    border-radius: 1rem;
}

.project-index {
    position: absolute;
    top: -1.5rem;
    left: -1.5rem;
    font-size: 6rem;
    font-weight: 700;
    color: rgba(255, 255, 255, 0.05);
    user-select: none;
}

.project-body h3 { margin-bottom: 1rem; font-size: 1.875rem; }
.project-body p { margin-bottom: 1.5rem; color: var(--text-muted); }

.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }

.tag {
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(59, 130, 246, 0.2);
    border-radius: 9999px;
    background: rgba(59, 130, 246, 0.1);
    font-size: 0.875rem;
    color: #93c5fd;
}

.tag-plain { font-size: 0.75rem; color: rgba(255, 255, 255, 0.45); }

.project-links { display: flex; gap: 1rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.7); }
.project-links a:hover { color: var(--text); }

.other-projects h3 { margin-bottom: 2rem; font-size: 1.25rem; color: var(--text-muted); }

.project-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.project-card { padding: 0; overflow: hidden; }
.project-card img { width: 100%; height: 12rem; object-fit: cover; }
.project-card-body { padding: 1.5rem; }
.project-card h4 { display: flex; justify-content: space-between; margin-bottom: 0.75rem; font-size: 1.125rem; }
.project-card p { margin-bottom: 1rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.55); }

/* Contact */
.contact-grid {
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 3rem;
}

.contact-info h3 { margin-bottom: 0.75rem; font-size: 1.5rem; }
.contact-info > p { color: rgba(255, 255, 255, 0.55); }

.info-items { display: flex; flex-direction: column; gap: 1rem; margin-top: 2rem; }

.info-item {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--surface);
}

a.info-item:hover { border-color: var(--border-hover); }

.info-icon { padding: 0.75rem; border-radius: 0.5rem; background: rgba(99, 102, 241, 0.2); }
.info-text { flex: 1; display: flex; flex-direction: column; }
.info-label { font-size: 0.875rem; color: rgba(255, 255, 255, 0.45); }
.info-value { font-weight: 500; }

.contact-form {
    padding: 2rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--surface);
}

.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.field { margin-bottom: 1.5rem; }
.field label { display: block; margin-bottom: 0.5rem; font-size: 0.875rem; color: rgba(255, 255, 255, 0.55); }

.field input,
.field textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    background: var(--surface);
    color: var(--text);
    font: inherit;
    outline: none;
    resize: none;
}

.field input:focus,
.field textarea:focus { border-color: rgba(59, 130, 246, 0.6); }

.btn-submit {
    width: 100%;
    padding: 1rem 1.25rem;
    border: none;
    border-radius: 0.75rem;
    background: var(--gradient);
    color: var(--text);
    font: inherit;
    font-weight: 500;
    cursor: pointer;
}

.btn-submit:disabled { opacity: 0.7; cursor: not-allowed; }

.form-status { min-height: 1.25rem; margin-top: 1rem; text-align: center; font-size: 0.875rem; }
.form-status[data-status="sent"] { color: #6ee7b7; }
.form-status[data-status="error"] { color: #fca5a5; }

/* Footer */
.site-footer {
    padding: 2.5rem 1.5rem;
    border-top: 1px solid var(--border);
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

@keyframes bob {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(8px); }
}

@keyframes marquee {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}

/* Responsive */
@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-title { font-size: 3rem; }
    .section-header h2 { font-size: 2.25rem; }

    .about-grid,
    .skill-grid,
    .featured-project,
    .project-grid,
    .contact-grid,
    .form-row,
    .timeline-item {
        grid-template-columns: 1fr;
    }

    .timeline::before,
    .timeline-dot,
    .timeline-date { display: none; }

    .timeline-item .timeline-card { margin: 0; }
    .featured-project.reverse .project-body { text-align: left; }
}
"##;
