mod dashboard;
mod guess_game;
mod login;

pub use dashboard::DashboardPage;
pub use guess_game::GuessGamePage;
pub use login::LoginPage;
