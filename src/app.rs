use crate::components::{tab_body_style, tab_header, title_banner};
use crate::config::LaunchConfig;
use crate::launcher::run_segmentation;
use crate::message::Message;
use crate::model::Controller;
use crate::views::{pipeline_panel, status_line};
use env_logger::Env;
use iced::task::Handle;
use iced::widget::{button, column, container, row, Space};
use iced::{application, Alignment, Element, Length, Size, Task, Theme};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

const APP_TITLE: &str = "MemBrain - setup";
const BANNER_TITLE: &str = "MemBrain - SETUP";
const TAB_TITLE: &str = "MemBrain - pipeline";
const ABOUT_TEXT: &str = "This interface helps you set up MemBrain: import the tomograms to \
segment, choose a trained model checkpoint, then run the segmentation.";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .window_size(Size::new(560.0, 480.0))
        .run()
}

pub struct App {
    controller: Controller,
    config: LaunchConfig,
    /// Abort handle of the segmentation task, present while it runs.
    segmentation: Option<Handle>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(LaunchConfig::from_env())
    }
}

impl App {
    pub fn new(config: LaunchConfig) -> Self {
        log::info!("Segmentation program: {}", config.program);
        Self {
            controller: Controller::default(),
            config,
            segmentation: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pick(kind) => Task::perform(
                async move {
                    let (filter_name, extensions) = kind.file_filter();
                    AsyncFileDialog::new()
                        .set_title(kind.dialog_title())
                        .add_filter(filter_name, extensions)
                        .pick_files()
                        .await
                        .map(|handles| {
                            handles
                                .into_iter()
                                .map(|handle| handle.path().to_path_buf())
                                .collect()
                        })
                },
                move |picked| Message::Picked(kind, picked),
            ),
            Message::Picked(kind, picked) => {
                self.controller.apply_selection(kind, picked);
                Task::none()
            }
            Message::RunSegmentation => match self.controller.begin_run() {
                Ok(request) => {
                    let (task, handle) = Task::perform(
                        run_segmentation(self.config.program.clone(), request),
                        Message::SegmentationFinished,
                    )
                    .abortable();
                    self.segmentation = Some(handle);
                    task
                }
                Err(_) => Task::none(),
            },
            Message::SegmentationFinished(result) => {
                self.segmentation = None;
                self.controller.finish_run(result);
                Task::none()
            }
            Message::CancelSegmentation => {
                if self.controller.cancel_run() {
                    if let Some(handle) = self.segmentation.take() {
                        handle.abort();
                    }
                }
                Task::none()
            }
            Message::ShowAbout => Task::perform(
                AsyncMessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title("About")
                    .set_description(ABOUT_TEXT)
                    .set_buttons(MessageButtons::Ok)
                    .show(),
                |_| Message::AboutClosed,
            ),
            Message::AboutClosed => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let about_button = button("About")
            .on_press(Message::ShowAbout)
            .style(button::secondary);
        let top_bar = row![Space::with_width(Length::Fill), about_button].align_y(Alignment::Center);

        let mut panel = pipeline_panel(&self.controller);
        if let Some(status) = status_line(self.controller.run_state()) {
            panel = panel.push(status);
        }

        let tab = column![
            tab_header(TAB_TITLE),
            container(panel)
                .padding(16)
                .width(Length::Fill)
                .style(tab_body_style),
        ]
        .spacing(0);

        column![top_bar, title_banner(BANNER_TITLE), tab]
            .padding(20)
            .spacing(16)
            .align_x(Alignment::Start)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::RunOutcome;
    use crate::model::{RunBlocked, RunState, SelectionKind};
    use std::path::PathBuf;

    fn app() -> App {
        App::new(LaunchConfig::default())
    }

    fn pick(app: &mut App, kind: SelectionKind, raw: &[&str]) {
        let _ = app.update(Message::Picked(
            kind,
            Some(raw.iter().map(PathBuf::from).collect()),
        ));
    }

    #[test]
    fn run_without_selections_starts_nothing() {
        let mut app = app();
        let _ = app.update(Message::RunSegmentation);

        assert!(app.segmentation.is_none());
        assert_eq!(
            app.controller.run_state(),
            &RunState::Blocked(RunBlocked::MissingBoth)
        );
    }

    #[test]
    fn run_with_both_selections_tracks_the_task() {
        let mut app = app();
        pick(&mut app, SelectionKind::Tomograms, &["/data/t1.mrc"]);
        pick(&mut app, SelectionKind::Models, &["/models/ckpt.pt"]);

        let _ = app.update(Message::RunSegmentation);
        assert!(app.segmentation.is_some());
        assert!(app.controller.run_state().is_running());

        let _ = app.update(Message::SegmentationFinished(Ok(RunOutcome::Failed {
            code: 1,
        })));
        assert!(app.segmentation.is_none());
        assert_eq!(
            app.controller.run_state(),
            &RunState::Finished(RunOutcome::Failed { code: 1 })
        );
        assert_eq!(
            app.controller.label(SelectionKind::Tomograms),
            "Tomograms Selected: /data/t1.mrc"
        );
    }

    #[test]
    fn cancel_aborts_the_running_task() {
        let mut app = app();
        pick(&mut app, SelectionKind::Tomograms, &["/data/t1.mrc"]);
        pick(&mut app, SelectionKind::Models, &["/models/ckpt.pt"]);
        let _ = app.update(Message::RunSegmentation);

        let _ = app.update(Message::CancelSegmentation);
        assert!(app.segmentation.is_none());
        assert_eq!(app.controller.run_state(), &RunState::Cancelled);
    }

    #[test]
    fn dismissed_dialog_changes_nothing() {
        let mut app = app();
        pick(&mut app, SelectionKind::Models, &["/models/ckpt.pt"]);
        let _ = app.update(Message::Picked(SelectionKind::Models, None));

        assert_eq!(
            app.controller.label(SelectionKind::Models),
            "Model Selected: /models/ckpt.pt"
        );
    }
}
