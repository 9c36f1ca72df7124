//! Browser glue for the rendered page.
//!
//! The script mirrors the Rust controller and reveal trigger in the browser:
//! each `data-reveal="view"` section gets a one-shot IntersectionObserver, and
//! the contact form runs the idle/sending/sent/error cycle against the relay.

use folio_core::text::{
    ERROR_NOTICE, REQUIRED_NOTICE, SENDING_LABEL, SEND_LABEL, SENT_NOTICE, SUBJECT_PREFIX,
};
use folio_core::SiteConfig;
use serde::Serialize;

use crate::sections::CONTACT_FORM_ID;

/// Serialize a value as a JS literal safe to inline in a `<script>` element.
fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

#[derive(Serialize)]
struct FormText<'a> {
    send: &'a str,
    sending: &'a str,
    sent: &'a str,
    error: &'a str,
    required: &'a str,
    subject: &'a str,
}

/// Build the inline page script for a configuration.
pub fn page_script(config: &SiteConfig) -> String {
    let text = FormText {
        send: SEND_LABEL,
        sending: SENDING_LABEL,
        sent: SENT_NOTICE,
        error: ERROR_NOTICE,
        required: REQUIRED_NOTICE,
        subject: SUBJECT_PREFIX,
    };

    format!(
        r#"(() => {{
  const ENDPOINT = {endpoint};
  const REVERT_MS = {revert_ms};
  const ROOT_MARGIN = {margin};
  const TEXT = {text};

  // Reveal: latch once, then stop observing.
  const reveal = (el) => el.classList.add('is-revealed');
  document.querySelectorAll('[data-reveal="load"]').forEach(reveal);
  const lazy = document.querySelectorAll('[data-reveal="view"]');
  if (!('IntersectionObserver' in window)) {{
    lazy.forEach(reveal);
  }} else {{
    lazy.forEach((section) => {{
      const observer = new IntersectionObserver((entries) => {{
        if (entries.some((entry) => entry.isIntersecting)) {{
          reveal(section);
          observer.disconnect();
        }}
      }}, {{ rootMargin: section.dataset.revealMargin || ROOT_MARGIN }});
      observer.observe(section);
    }});
  }}

  // Contact form.
  const form = document.getElementById({form_id});
  if (!form) return;
  const button = form.querySelector('button[type="submit"]');
  const label = form.querySelector('.btn-label');
  const notice = form.querySelector('.form-status');
  const endpoint = form.dataset.endpoint || ENDPOINT;
  const revertMs = Number(form.dataset.revertMs) || REVERT_MS;
  let status = 'idle';
  let revertTimer = null;

  const setStatus = (next) => {{
    status = next;
    button.disabled = status === 'sending';
    label.textContent = status === 'sending' ? TEXT.sending : TEXT.send;
    notice.dataset.status = status;
    notice.textContent = status === 'sent' ? TEXT.sent : status === 'error' ? TEXT.error : '';
  }};

  const scheduleRevert = () => {{
    clearTimeout(revertTimer);
    revertTimer = setTimeout(() => {{
      if (status === 'sent' || status === 'error') setStatus('idle');
    }}, revertMs);
  }};

  // `required` accepts whitespace; a blank name or message blocks the attempt.
  const blankField = (data) =>
    ['name', 'message'].find((key) => !String(data[key] || '').trim());

  form.addEventListener('input', (event) => event.target.setCustomValidity(''));

  form.addEventListener('submit', async (event) => {{
    event.preventDefault();
    if (status === 'sending') return;

    const data = Object.fromEntries(new FormData(form));
    const blank = blankField(data);
    if (blank) {{
      const input = form.elements.namedItem(blank);
      input.setCustomValidity(TEXT.required);
      input.reportValidity();
      return;
    }}
    data.email = String(data.email || '').trim();

    clearTimeout(revertTimer);
    setStatus('sending');
    try {{
      const res = await fetch(endpoint, {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json', Accept: 'application/json' }},
        body: JSON.stringify({{
          name: data.name,
          email: data.email,
          message: data.message,
          _replyto: data.email,
          _subject: TEXT.subject + ' ' + data.name,
        }}),
      }});
      if (!res.ok) throw new Error('relay answered ' + res.status);
      form.reset();
      setStatus('sent');
    }} catch (err) {{
      console.error(err);
      setStatus('error');
    }}
    scheduleRevert();
  }});
}})();"#,
        endpoint = js_literal(&config.relay.endpoint),
        revert_ms = config.relay.revert_delay_ms,
        margin = js_literal(&config.reveal.css_margin()),
        text = js_literal(&text),
        form_id = js_literal(CONTACT_FORM_ID),
    )
}
