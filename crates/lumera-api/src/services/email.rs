//! Email service for contact form notifications via SMTP.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use tracing::info;

use lumera_core::{models::ContactMessage, Config};

/// Sends a notification to the studio when a contact message arrives.
/// No-op if notifications are disabled or SMTP is not configured.
#[derive(Clone)]
pub struct EmailService {
    mailer: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    notify: String,
}

impl EmailService {
    /// Create email service from config. Returns `None` if disabled or SMTP not configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.email_notifications_enabled {
            tracing::debug!("Contact notifications disabled (EMAIL_NOTIFICATIONS_ENABLED=false)");
            return None;
        }
        let host = config.smtp_host.as_deref()?;
        let from = config.smtp_from.clone()?;
        let notify = config.contact_notify_email.clone()?;
        let port = config.smtp_port.unwrap_or(587);

        let mailer = if config.smtp_tls {
            let b = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host).ok()?;
            let b = b.port(port);
            let b = if let (Some(u), Some(p)) = (&config.smtp_user, &config.smtp_password) {
                b.credentials(Credentials::new(u.clone(), p.clone()))
            } else {
                b
            };
            tracing::info!(
                host = %host,
                port = port,
                "Email service initialized (SMTP with STARTTLS)"
            );
            b.build()
        } else {
            let b = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port);
            let b = if let (Some(u), Some(p)) = (&config.smtp_user, &config.smtp_password) {
                b.credentials(Credentials::new(u.clone(), p.clone()))
            } else {
                b
            };
            tracing::info!(host = %host, port = port, "Email service initialized (SMTP)");
            b.build()
        };

        Some(Self {
            mailer: Arc::new(mailer),
            from,
            notify,
        })
    }

    /// Send a contact-message notification to the studio address.
    pub async fn send_contact_notification(&self, message: &ContactMessage) -> Result<(), String> {
        let from_addr: Mailbox = self
            .from
            .parse()
            .map_err(|e| format!("Invalid SMTP_FROM: {}", e))?;
        let to_addr: Mailbox = self
            .notify
            .parse()
            .map_err(|e| format!("Invalid CONTACT_NOTIFY_EMAIL: {}", e))?;

        let subject = match message.subject.as_deref() {
            Some(s) if !s.trim().is_empty() => format!("Contact form: {}", s),
            _ => format!("Contact form message from {}", message.name),
        };

        let body = format!(
            "From: {} <{}>\n\n{}",
            message.name, message.email, message.body
        );

        let email = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await.map_err(|e| e.to_string())?;
        info!(message_id = %message.id, "Contact notification email sent");
        Ok(())
    }
}
