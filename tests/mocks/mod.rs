mod mock_mailer;

pub use mock_mailer::MockMailer;
