//! Create User Linux App
//!
//! Desktop host for the Create User form, built with the Iced GUI framework.
//! The window shows the form until the signup API accepts a new account, then
//! switches to a confirmation screen.

use iced::widget::text_input;
use iced::{Element, Size, Subscription, Task, Theme};
use tracing::{debug, error, info, warn};

mod config;
mod logging;
mod ui;

use config::AppConfig;
use create_user_shared::SignupClient;
use ui::views::{CreateUserMessage, CreateUserView, UserCreatedMessage};

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Messages for the create-user form
    CreateUser(CreateUserMessage),
    /// Raised by the form once the server accepted the new account
    UserCreated(bool),
    /// Messages for the confirmation screen
    UserCreatedScreen(UserCreatedMessage),
}

/// Screens of the app
#[derive(Debug)]
pub enum Screen {
    CreateUser(CreateUserView),
    UserCreated,
}

/// Main application structure
pub struct CreateUserApp {
    screen: Screen,
    config: AppConfig,
    client: SignupClient,
    theme: Theme,
}

impl CreateUserApp {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        info!("Initializing Create User app");

        let client = SignupClient::new();
        let screen = Screen::CreateUser(CreateUserView::new(
            client.clone(),
            config.ui.animate_background,
            Message::UserCreated,
        ));

        let app = Self {
            screen,
            config,
            client,
            theme: ui::create_app_theme(),
        };

        (app, text_input::focus(text_input::Id::new("username")))
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::CreateUser(view) if view.form().is_submitting() => {
                "Create User - Creating...".to_string()
            }
            Screen::CreateUser(_) => "Create User".to_string(),
            Screen::UserCreated => "Create User - Done".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CreateUser(form_msg) => {
                if let Screen::CreateUser(view) = &mut self.screen {
                    return view.update(form_msg);
                }

                // The form was unmounted while its request was in flight
                if let CreateUserMessage::SubmissionFinished(outcome) = form_msg {
                    debug!("Dropping stale submission result: {:?}", outcome);
                }
                Task::none()
            }

            Message::UserCreated(created) => {
                if created {
                    info!("User created, leaving the form");
                    self.screen = Screen::UserCreated;
                }
                Task::none()
            }

            Message::UserCreatedScreen(UserCreatedMessage::CreateAnother) => {
                debug!("Remounting create-user form");
                self.screen = Screen::CreateUser(CreateUserView::new(
                    self.client.clone(),
                    self.config.ui.animate_background,
                    Message::UserCreated,
                ));
                text_input::focus(text_input::Id::new("username"))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::CreateUser(view) => view.view().map(Message::CreateUser),
            Screen::UserCreated => ui::views::user_created::view().map(Message::UserCreatedScreen),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::CreateUser(view) => view.subscription().map(Message::CreateUser),
            Screen::UserCreated => Subscription::none(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn main() -> iced::Result {
    let (config, config_error) = match AppConfig::load_or_default() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let logging_config = logging::LoggingConfig::for_build().with_settings(&config.logging);
    if let Err(e) = logging::initialize_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    if let Some(e) = config_error {
        warn!("Using default configuration: {:#}", e);
    }

    info!("Starting Create User app v{}", create_user_shared::VERSION);

    let window_size = Size::new(config.ui.window_width, config.ui.window_height);

    let result = iced::application(CreateUserApp::title, CreateUserApp::update, CreateUserApp::view)
        .subscription(CreateUserApp::subscription)
        .theme(CreateUserApp::theme)
        .window_size(window_size)
        .centered()
        .antialiasing(true)
        .run_with(move || CreateUserApp::new(config));

    if let Err(e) = &result {
        error!("Application exited with error: {}", e);
    }

    result
}
