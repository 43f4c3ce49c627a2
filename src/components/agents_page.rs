use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, SharedString, Styled, div, prelude::*, px,
    rgb,
};
use gpui_component::{
    IconName,
    button::{Button, ButtonVariants},
    checkbox::Checkbox,
    input::TextInput,
};

use crate::components::LauncherView;

pub fn render(view: &LauncherView, cx: &mut Context<LauncherView>) -> impl IntoElement + use<> {
    let agents = view.model.agents().agents();

    let rows = agents
        .iter()
        .enumerate()
        .map(|(index, agent)| {
            div()
                .flex()
                .items_center()
                .justify_between()
                .gap_3()
                .p_2()
                .rounded_md()
                .bg(rgb(0x24242B))
                .child(
                    Checkbox::new(SharedString::from(format!("agent-enabled-{}", index)))
                        .label(agent.path.clone())
                        .checked(agent.enabled)
                        .on_click(cx.listener(move |view, checked: &bool, _, cx| {
                            view.model.agents_mut().set_enabled(index, *checked);
                            cx.notify();
                        })),
                )
                .child(
                    Button::new(SharedString::from(format!("agent-remove-{}", index)))
                        .icon(IconName::Delete)
                        .ghost()
                        .on_click(cx.listener(move |view, _: &ClickEvent, _, cx| {
                            if let Some(agent) = view.model.agents_mut().remove_agent(index) {
                                tracing::debug!("Removed agent '{}'", agent.path);
                            }
                            cx.notify();
                        })),
                )
        })
        .collect::<Vec<_>>();

    let empty = agents.is_empty();

    div()
        .flex()
        .flex_col()
        .gap(px(20.))
        .py(px(10.))
        .child(div().text_sm().text_color(rgb(0x888888)).child(
            "Java agents are passed to the game with -javaagent. Only checked agents are used.",
        ))
        .when(empty, |this| {
            this.child(
                div()
                    .text_color(rgb(0x888888))
                    .child("No agents yet"),
            )
        })
        .child(div().flex().flex_col().gap_2().children(rows))
        .child(
            div()
                .flex()
                .items_center()
                .gap(px(6.))
                .child(div().flex_1().child(TextInput::new(&view.agent_path)))
                .child(
                    Button::new("browse-agent")
                        .icon(IconName::FolderOpen)
                        .ghost()
                        .on_click(cx.listener(|view, _: &ClickEvent, window, cx| {
                            view.browse_agent(window, cx);
                        })),
                )
                .child(
                    Button::new("add-agent")
                        .icon(IconName::Plus)
                        .label("Add")
                        .primary()
                        .on_click(cx.listener(|view, _: &ClickEvent, window, cx| {
                            view.add_agent(window, cx);
                        })),
                ),
        )
}
