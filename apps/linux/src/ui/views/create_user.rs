//! Create User view
//!
//! The single form of the app: username, password, live password checklist,
//! error line and submit button. While a request is in flight the inputs and
//! the button are disabled and the button reads "Creating...". A successful
//! signup is reported to the parent through the callback given to
//! [`CreateUserView::new`].

use std::time::Instant;

use iced::{
    alignment::Horizontal,
    widget::{button, column, container, row, text, text_input, Space},
    Element, Length, Subscription, Task,
};
use tracing::{debug, info};

use create_user_shared::{FormState, SignupClient, SignupOutcome};

use crate::ui::components::background::{GradientShift, TICK_INTERVAL};
use crate::ui::components::criteria_list;
use crate::ui::theme::{
    button_styles, container_styles, text_input_styles, utils,
    utils::typography::{self, SEMIBOLD},
    ERROR_RED, HEADING_TEXT, LABEL_TEXT,
};
use crate::Message;

/// Messages for the create-user view
#[derive(Debug, Clone)]
pub enum CreateUserMessage {
    UsernameChanged(String),
    PasswordChanged(String),
    SubmitPressed,
    SubmissionFinished(SignupOutcome),
    AnimationTick(Instant),
}

/// Create-user form view
#[derive(Debug)]
pub struct CreateUserView {
    form: FormState,
    client: SignupClient,
    background: GradientShift,
    animate_background: bool,
    on_user_created: fn(bool) -> Message,
}

impl CreateUserView {
    /// Mount a fresh, empty form.
    ///
    /// `on_user_created` is invoked with `true` once the server accepts the
    /// new account.
    pub fn new(
        client: SignupClient,
        animate_background: bool,
        on_user_created: fn(bool) -> Message,
    ) -> Self {
        debug!("Mounting create-user form");

        Self {
            form: FormState::new(),
            client,
            background: GradientShift::start(Instant::now()),
            animate_background,
            on_user_created,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Update view state based on message
    pub fn update(&mut self, message: CreateUserMessage) -> Task<Message> {
        match message {
            CreateUserMessage::UsernameChanged(username) => {
                self.form.set_username(username);
                Task::none()
            }

            CreateUserMessage::PasswordChanged(password) => {
                self.form.set_password(password);
                Task::none()
            }

            CreateUserMessage::SubmitPressed => {
                let Some(request) = self.form.begin_submission() else {
                    return Task::none();
                };

                info!("Submitting new user '{}'", request.username);
                let client = self.client.clone();

                Task::perform(
                    async move { client.create_user(&request).await },
                    |outcome| Message::CreateUser(CreateUserMessage::SubmissionFinished(outcome)),
                )
            }

            CreateUserMessage::SubmissionFinished(outcome) => match self.apply_outcome(outcome) {
                Some(notification) => Task::done(notification),
                None => Task::none(),
            },

            CreateUserMessage::AnimationTick(now) => {
                self.background.tick(now);
                Task::none()
            }
        }
    }

    /// Apply a submission outcome to the form and return the parent
    /// notification, if the callback fired.
    fn apply_outcome(&mut self, outcome: SignupOutcome) -> Option<Message> {
        let on_user_created = self.on_user_created;
        let mut notification = None;

        self.form
            .finish_submission(outcome, |created| notification = Some(on_user_created(created)));

        if let Some(error) = self.form.error_message() {
            debug!("Showing submission error: {}", error);
        }

        notification
    }

    /// Ticks for the background animation, only while this view is mounted
    pub fn subscription(&self) -> Subscription<CreateUserMessage> {
        if self.animate_background {
            iced::time::every(TICK_INTERVAL).map(CreateUserMessage::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    /// Render the form
    pub fn view(&self) -> Element<'_, CreateUserMessage> {
        let interactive = self.form.is_interactive();

        let heading = text("Create User")
            .size(typography::HEADING_SIZE)
            .color(HEADING_TEXT)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let username_input = text_input("Enter your username", self.form.username())
            .id(text_input::Id::new("username"))
            .on_input_maybe(interactive.then_some(CreateUserMessage::UsernameChanged))
            .on_submit(CreateUserMessage::SubmitPressed)
            .padding(utils::input_padding())
            .size(typography::INPUT_SIZE)
            .style(text_input_styles::form_field());

        let password_input = text_input("Enter your password", self.form.password())
            .id(text_input::Id::new("password"))
            .secure(true)
            .on_input_maybe(interactive.then_some(CreateUserMessage::PasswordChanged))
            .on_submit(CreateUserMessage::SubmitPressed)
            .padding(utils::input_padding())
            .size(typography::INPUT_SIZE)
            .style(text_input_styles::form_field());

        let submit_label = if self.form.is_submitting() {
            "Creating..."
        } else {
            "Create User"
        };

        let submit_button = button(
            text(submit_label)
                .font(SEMIBOLD)
                .size(typography::INPUT_SIZE)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press_maybe(interactive.then_some(CreateUserMessage::SubmitPressed))
        .padding(utils::button_padding())
        .width(Length::FillPortion(2))
        .style(button_styles::submit());

        let error_line = self.form.error_message().map(|message| {
            text(message)
                .font(SEMIBOLD)
                .size(typography::LABEL_SIZE)
                .color(ERROR_RED)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
        });

        let form = column![
            heading,
            field_label("Username"),
            username_input,
            field_label("Password"),
            password_input,
            criteria_list::criteria_list(&self.form.criteria()),
        ]
        .push_maybe(error_line)
        .push(row![
            Space::with_width(Length::FillPortion(1)),
            submit_button,
            Space::with_width(Length::FillPortion(1)),
        ])
        .spacing(utils::form_spacing());

        let card = container(form)
            .padding(utils::card_padding())
            .max_width(utils::card_max_width())
            .style(container_styles::card());

        container(card)
            .center(Length::Fill)
            .padding(20)
            .style(container_styles::backdrop(self.background.background()))
            .into()
    }
}

fn field_label(label: &str) -> Element<'_, CreateUserMessage> {
    text(label)
        .font(SEMIBOLD)
        .size(typography::LABEL_SIZE)
        .color(LABEL_TEXT)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use create_user_shared::constants::*;

    fn view() -> CreateUserView {
        CreateUserView::new(SignupClient::new(), false, Message::UserCreated)
    }

    fn fill(view: &mut CreateUserView) {
        let _ = view.update(CreateUserMessage::UsernameChanged("alice".to_string()));
        let _ = view.update(CreateUserMessage::PasswordChanged("Ab1!aaaa".to_string()));
    }

    #[test]
    fn test_mounts_empty() {
        let view = view();
        assert_eq!(view.form().username(), "");
        assert_eq!(view.form().password(), "");
        assert_eq!(view.form().error_message(), None);
        assert!(!view.form().is_submitting());
    }

    #[test]
    fn test_input_updates_state() {
        let mut view = view();
        fill(&mut view);
        assert_eq!(view.form().username(), "alice");
        assert_eq!(view.form().password(), "Ab1!aaaa");
        assert!(view.form().criteria().iter().all(|c| c.satisfied));
    }

    #[test]
    fn test_submit_disables_form_until_outcome() {
        let mut view = view();
        fill(&mut view);

        let _ = view.update(CreateUserMessage::SubmitPressed);
        assert!(view.form().is_submitting());
        assert!(!view.form().is_interactive());

        // A second press while pending changes nothing
        let _ = view.update(CreateUserMessage::SubmitPressed);
        assert!(view.form().is_submitting());

        let _ = view.update(CreateUserMessage::SubmissionFinished(
            SignupOutcome::GenericFailure,
        ));
        assert!(view.form().is_interactive());
    }

    #[test]
    fn test_success_notifies_parent() {
        let mut view = view();
        fill(&mut view);
        let _ = view.update(CreateUserMessage::SubmitPressed);

        let notification = view.apply_outcome(SignupOutcome::Success);
        assert_matches!(notification, Some(Message::UserCreated(true)));
        assert_eq!(view.form().error_message(), None);
        assert!(!view.form().is_submitting());
    }

    #[test]
    fn test_failure_shows_message() {
        let mut view = view();
        fill(&mut view);
        let _ = view.update(CreateUserMessage::SubmitPressed);

        let notification = view.apply_outcome(SignupOutcome::Unauthorized);
        assert!(notification.is_none());
        assert_eq!(view.form().error_message(), Some(NOT_AUTHENTICATED_MESSAGE));
        assert!(!view.form().is_submitting());
    }

    #[test]
    fn test_animation_tick_advances_background() {
        let mut view = view();
        let later = Instant::now() + std::time::Duration::from_secs(10);
        let _ = view.update(CreateUserMessage::AnimationTick(later));
        assert!(view.background.position() > 0.9);
    }
}
