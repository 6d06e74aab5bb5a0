pub mod dashboard;
pub mod login_page;
pub mod payment_page;
pub mod setup_form;

pub use dashboard::Dashboard;
pub use login_page::LoginPage;
pub use payment_page::PaymentPage;
pub use setup_form::SetupForm;
