//! Contact section: info cards and the relay-backed form.

use folio_core::text::{EMAIL_LABEL, MESSAGE_LABEL, NAME_LABEL, SEND_LABEL};
use folio_core::{RelayConfig, RevealConfig, SectionAnchor, SiteIdentity};
use folio_render::{html_escape, Entrance, Section};

use super::{ms, section_header};

/// Id of the form element the page script binds to.
pub const CONTACT_FORM_ID: &str = "contact-form";

const INTRO: &str =
    "Want to collaborate or have an opportunity in mind? Send me a message and I’ll get back to you.";
const PITCH: &str = "I’m currently open to full-time roles and selective freelance work. \
                     If you have something you want to build, let’s talk.";

fn info_items(site: &SiteIdentity) -> String {
    let mut html = format!(
        r#"<a class="info-item" href="{}">
    <span class="info-icon">✉</span>
    <span class="info-text"><span class="info-label">Email</span><span class="info-value">{}</span></span>
    <span class="arrow">↗</span>
</a>"#,
        html_escape(&site.mailto()),
        html_escape(&site.email)
    );
    if let Some(location) = &site.location {
        html.push_str(&format!(
            r#"
<div class="info-item">
    <span class="info-icon">📍</span>
    <span class="info-text"><span class="info-label">Location</span><span class="info-value">{}</span></span>
</div>"#,
            html_escape(location)
        ));
    }
    html
}

fn form(site: &SiteIdentity, relay: &RelayConfig) -> String {
    let endpoint = html_escape(&relay.endpoint);
    format!(
        r#"<form id="{id}" class="contact-form" method="post" action="{endpoint}" data-endpoint="{endpoint}" data-revert-ms="{revert}">
    <div class="form-row">
        <div class="field">
            <label for="contact-name">{name_label}</label>
            <input id="contact-name" name="name" placeholder="{placeholder}" required>
        </div>
        <div class="field">
            <label for="contact-email">{email_label}</label>
            <input id="contact-email" name="email" type="email" placeholder="you@example.com" required>
        </div>
    </div>
    <div class="field">
        <label for="contact-message">{message_label}</label>
        <textarea id="contact-message" name="message" rows="6" placeholder="Tell me what you’re working on…" required></textarea>
    </div>
    <button type="submit" class="btn-submit"><span class="btn-label">{send}</span></button>
    <p class="form-status" role="status" aria-live="polite" data-status="idle"></p>
</form>"#,
        id = CONTACT_FORM_ID,
        endpoint = endpoint,
        revert = relay.revert_delay_ms,
        name_label = NAME_LABEL,
        placeholder = html_escape(&site.name),
        email_label = EMAIL_LABEL,
        message_label = MESSAGE_LABEL,
        send = SEND_LABEL
    )
}

/// Render the contact section.
pub fn contact_section(site: &SiteIdentity, relay: &RelayConfig, reveal: &RevealConfig) -> Section {
    let body = format!(
        r#"<div class="container">
{}
<p class="section-intro" {}>{}</p>
<div class="contact-grid">
    <div class="contact-info" {}>
        <h3>Get in touch</h3>
        <p>{}</p>
        <div class="info-items">
{}
        </div>
    </div>
    <div class="contact-form-wrap" {}>
{}
    </div>
</div>
</div>"#,
        section_header(SectionAnchor::Contact, "Let’s work", "together"),
        Entrance::rise(20).attrs(),
        INTRO,
        Entrance::slide(-30).with_delay(ms(200)).attrs(),
        PITCH,
        info_items(site),
        Entrance::slide(30).with_delay(ms(300)).attrs(),
        form(site, relay)
    );

    Section::builder("contact")
        .anchor(SectionAnchor::Contact.id())
        .class("section contact")
        .reveal_on_view(reveal.root_margin_px)
        .body(body)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn render(relay: &RelayConfig) -> String {
        contact_section(&SiteIdentity::default(), relay, &RevealConfig::default()).render()
    }

    #[test]
    fn test_form_wiring() {
        let html = render(&RelayConfig::default());

        assert!(html.contains(r#"id="contact-form""#));
        assert!(html.contains(r#"data-endpoint="https://formspree.io/f/mdallzjl""#));
        assert!(html.contains(r#"data-revert-ms="2500""#));
        for name in ["name", "email", "message"] {
            assert!(html.contains(&format!(r#"name="{}""#, name)));
        }
        assert_eq!(html.matches(" required").count(), 3);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_form_uses_configured_relay() {
        let relay = RelayConfig::new("https://relay.example/f/abc?x=1&y=2")
            .with_revert_delay(Duration::from_millis(4000));
        let html = render(&relay);

        assert!(html.contains(r#"data-endpoint="https://relay.example/f/abc?x=1&amp;y=2""#));
        assert!(html.contains(r#"data-revert-ms="4000""#));
    }

    #[test]
    fn test_info_items() {
        let html = render(&RelayConfig::default());
        assert!(html.contains("05. CONTACT"));
        assert!(html.contains(r#"href="mailto:bychinmark@gmail.com""#));
        assert!(html.contains(r#"<span class="info-label">Location</span>"#));
    }
}
