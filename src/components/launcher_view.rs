use gpui::{
    App, AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, PromptLevel, Render,
    Styled, Subscription, Window, div, prelude::*, px, rgb,
};
use gpui_component::input::{InputEvent, InputState};
use gpui_component::slider::{SliderEvent, SliderState, SliderValue};
use lc_config::GeneralPage;
use lc_config::general::{MEMORY_RANGE, parse_window_dimension};
use lc_core::{LaunchVariant, MainWindow, PageKind};
use tracing::{debug, info};

use crate::components::{agents_page, general_page, sidebar};

pub struct LauncherView {
    pub(crate) model: MainWindow,
    pub(crate) initial_memory: Entity<SliderState>,
    pub(crate) max_memory: Entity<SliderState>,
    pub(crate) window_width: Entity<InputState>,
    pub(crate) window_height: Entity<InputState>,
    pub(crate) jre_path: Entity<InputState>,
    pub(crate) jvm_args: Entity<InputState>,
    pub(crate) agent_path: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

fn memory_slider(mib: u32, cx: &mut App) -> Entity<SliderState> {
    cx.new(|_| {
        SliderState::new()
            .min(*MEMORY_RANGE.start() as f32)
            .max(*MEMORY_RANGE.end() as f32)
            .step(1.)
            .default_value(mib as f32)
    })
}

fn line_input(
    placeholder: &'static str,
    value: String,
    window: &mut Window,
    cx: &mut App,
) -> Entity<InputState> {
    cx.new(|cx| {
        InputState::new(window, cx)
            .placeholder(placeholder)
            .default_value(value)
    })
}

impl LauncherView {
    pub fn new(model: MainWindow, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let this = cx.entity().downgrade();
        window.on_window_should_close(cx, move |_window, cx| {
            this.update(cx, |view, _| view.model.on_shutdown_requested())
                .unwrap_or(true)
        });

        let general = model.general();
        let initial_memory = memory_slider(general.initial_memory(), cx);
        let max_memory = memory_slider(general.max_memory(), cx);
        let window_width = line_input("640", general.window_width().to_string(), window, cx);
        let window_height = line_input("480", general.window_height().to_string(), window, cx);
        let jre_path = line_input(
            "Path to a java executable",
            general.jre_path().to_string(),
            window,
            cx,
        );
        let jvm_args_value = general.jvm_args().to_string();
        let jvm_args = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line()
                .placeholder("-XX:+UseG1GC")
                .default_value(jvm_args_value)
        });
        let agent_path = line_input("Path to an agent jar", String::new(), window, cx);

        let _subscriptions = vec![
            cx.subscribe_in(&initial_memory, window, Self::on_initial_memory),
            cx.subscribe_in(&max_memory, window, Self::on_max_memory),
            cx.subscribe_in(&window_width, window, Self::on_window_width),
            cx.subscribe_in(&window_height, window, Self::on_window_height),
            cx.subscribe_in(&jre_path, window, Self::on_jre_path),
            cx.subscribe_in(&jvm_args, window, Self::on_jvm_args),
            cx.subscribe_in(&agent_path, window, Self::on_agent_path),
        ];

        Self {
            model,
            initial_memory,
            max_memory,
            window_width,
            window_height,
            jre_path,
            jvm_args,
            agent_path,
            _subscriptions,
        }
    }

    fn on_initial_memory(
        &mut self,
        _: &Entity<SliderState>,
        event: &SliderEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let SliderEvent::Change(SliderValue::Single(mib)) = event else {
            return;
        };
        let general = self.model.general_mut();
        general.set_initial_memory(mib.round() as u32);
        if general.keeps_memory_same() {
            self.sync_max_memory(window, cx);
        }
        cx.notify();
    }

    fn on_max_memory(
        &mut self,
        _: &Entity<SliderState>,
        event: &SliderEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let SliderEvent::Change(SliderValue::Single(mib)) = event else {
            return;
        };
        if !self.model.general_mut().set_max_memory(mib.round() as u32) {
            self.sync_max_memory(window, cx);
        }
        cx.notify();
    }

    /// Moves the maximum memory slider to the page's value.
    pub(crate) fn sync_max_memory(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let mib = self.model.general().max_memory() as f32;
        self.max_memory
            .update(cx, |slider, cx| slider.set_value(mib, window, cx));
    }

    fn on_window_width(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.on_dimension(state, event, window, cx, |general, width| {
            general.set_window_width(width);
            general.window_width()
        });
    }

    fn on_window_height(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.on_dimension(state, event, window, cx, |general, height| {
            general.set_window_height(height);
            general.window_height()
        });
    }

    /// Applies every edit to the page. Non-digits are dropped while typing and
    /// the field shows the clamped value once editing ends.
    fn on_dimension(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
        apply: fn(&mut GeneralPage, u32) -> u32,
    ) {
        let text = state.read(cx).value().to_string();
        let shown = match event {
            InputEvent::Change { .. } => {
                let digits: String = text.chars().filter(char::is_ascii_digit).collect();
                apply(self.model.general_mut(), parse_window_dimension(&digits));
                digits
            }
            InputEvent::Blur { .. } | InputEvent::PressEnter { .. } => {
                apply(self.model.general_mut(), parse_window_dimension(&text)).to_string()
            }
            _ => return,
        };
        if shown != text {
            state.update(cx, |input, cx| input.set_value(shown, window, cx));
        }
        cx.notify();
    }

    fn on_jre_path(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change { .. } = event {
            let path = state.read(cx).value().to_string();
            if !self.model.general_mut().set_custom_jre_path(path) {
                debug!("Custom JRE path is disabled, edit ignored");
            }
        }
    }

    fn on_jvm_args(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change { .. } = event {
            let args = state.read(cx).value().to_string();
            self.model.general_mut().set_jvm_args(args);
        }
    }

    fn on_agent_path(
        &mut self,
        _: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::PressEnter { .. } = event {
            self.add_agent(window, cx);
        }
    }

    pub(crate) fn select_page(&mut self, row: usize, cx: &mut Context<Self>) {
        if self.model.select_page(row) {
            cx.notify();
        }
    }

    pub(crate) fn launch(
        &mut self,
        variant: LaunchVariant,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(handle) = self.model.launch(variant) else {
            return;
        };
        cx.notify();

        cx.spawn_in(window, async move |this, cx| {
            let event = handle.wait().await;
            this.update_in(cx, |view, window, cx| {
                view.model.on_launch_event(event);
                view.show_notices(window, cx);
                cx.notify();
            })
        })
        .detach();
    }

    fn show_notices(&mut self, window: &mut Window, cx: &mut App) {
        while let Some(notice) = self.model.take_notice() {
            info!("Showing notice: {}", notice.message);
            let _answer = window.prompt(
                PromptLevel::Critical,
                &notice.title,
                Some(notice.message.as_str()),
                &["OK"],
                cx,
            );
        }
    }

    pub(crate) fn browse_jre(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        cx.spawn_in(window, async move |this, cx| {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select a Java executable")
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf());
            this.update_in(cx, |view, window, cx| {
                if view.model.general_mut().apply_browsed_jre(picked.as_deref()) {
                    let path = view.model.general().jre_path().to_string();
                    debug!("Custom JRE set to {}", path);
                    view.jre_path
                        .update(cx, |input, cx| input.set_value(path, window, cx));
                    cx.notify();
                }
            })
        })
        .detach();
    }

    pub(crate) fn browse_agent(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        cx.spawn_in(window, async move |this, cx| {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Select an agent jar")
                .add_filter("Java agent", &["jar"])
                .pick_file()
                .await;
            let Some(file) = picked else {
                return Ok(());
            };
            let path = file.path().to_string_lossy().into_owned();
            this.update_in(cx, |view, window, cx| {
                view.agent_path
                    .update(cx, |input, cx| input.set_value(path, window, cx));
            })
        })
        .detach();
    }

    pub(crate) fn add_agent(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let path = self.agent_path.read(cx).value().to_string();
        if self.model.agents_mut().add_agent(path.clone()) {
            self.agent_path
                .update(cx, |input, cx| input.set_value("", window, cx));
        } else {
            debug!("Agent '{}' not added", path);
        }
        cx.notify();
    }

    pub(crate) fn select_version(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.model.select_version(index) {
            cx.notify();
        }
    }
}

impl Render for LauncherView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.model.current_page() {
            PageKind::General => general_page::render(self, cx).into_any_element(),
            PageKind::Agents => agents_page::render(self, cx).into_any_element(),
        };

        div()
            .flex()
            .size_full()
            .bg(rgb(0x1A1A1F))
            .text_color(rgb(0xE6E6EB))
            .child(sidebar::render(self, cx))
            .child(
                div()
                    .id("page-content")
                    .flex_1()
                    .h_full()
                    .px(px(30.))
                    .py(px(10.))
                    .overflow_y_scroll()
                    .child(content),
            )
    }
}

pub(crate) fn on_launch_click(
    variant: LaunchVariant,
) -> impl Fn(&mut LauncherView, &ClickEvent, &mut Window, &mut Context<LauncherView>) + 'static {
    move |view, _, window, cx| view.launch(variant, window, cx)
}
