use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};

use crate::config::Config;

/// SMTP collaborator for delivering generated credentials. Delivery is
/// best-effort: every failure path reports `false` and the caller falls back
/// to returning the credential inline.
pub struct Mailer {
    transport: Option<SmtpTransport>,
    sender: Option<Mailbox>,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Self {
        let disabled = Self {
            transport: None,
            sender: None,
        };

        let (Some(email), Some(password)) = (&config.smtp_email, &config.smtp_password) else {
            tracing::warn!("SMTP credentials not configured; credential emails disabled");
            return disabled;
        };

        let sender = match email.parse::<Mailbox>() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!("Invalid SMTP_EMAIL address {}: {}", email, e);
                return disabled;
            }
        };

        let transport = match SmtpTransport::starttls_relay(&config.smtp_server) {
            Ok(builder) => builder
                .port(config.smtp_port)
                .credentials(Credentials::new(email.clone(), password.clone()))
                .build(),
            Err(e) => {
                tracing::warn!("Failed to set up SMTP relay {}: {}", config.smtp_server, e);
                return disabled;
            }
        };

        Self {
            transport: Some(transport),
            sender: Some(sender),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    pub fn send_credentials(&self, to_email: &str, name: &str, password: &str) -> bool {
        let (Some(transport), Some(sender)) = (&self.transport, &self.sender) else {
            return false;
        };

        let to = match to_email.parse::<Mailbox>() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!("Invalid recipient address {}: {}", to_email, e);
                return false;
            }
        };

        let plain = format!(
            "Dear {name},\n\n\
             Your Faculty Portal account has been created successfully.\n\n\
             Login Credentials:\n\
             Email: {to_email}\n\
             Password: {password}\n\n\
             Please change your password after first login.\n\n\
             This is an automated message. Please do not reply."
        );

        let html = format!(
            "<html><body style=\"font-family: Arial, sans-serif; color: #333;\">\
             <h2>Faculty Portal</h2>\
             <p>Dear <strong>{name}</strong>,</p>\
             <p>Your account has been created successfully. Please use the \
             following credentials to login:</p>\
             <p>Email: <code>{to_email}</code><br>\
             Password: <code>{password}</code></p>\
             <p>Please change your password after first login.</p>\
             <p style=\"color: #888; font-size: 0.85em;\">This is an automated \
             message. Please do not reply to this email.</p>\
             </body></html>"
        );

        let message = match Message::builder()
            .from(sender.clone())
            .to(to)
            .subject("Your Faculty Portal Login Credentials")
            .multipart(MultiPart::alternative_plain_html(plain, html))
        {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Failed to build credential email: {}", e);
                return false;
            }
        };

        match transport.send(&message) {
            Ok(_) => {
                tracing::info!("Credential email sent to {}", to_email);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to send credential email to {}: {}", to_email, e);
                false
            }
        }
    }
}
