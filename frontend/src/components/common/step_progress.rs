use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct StepProgressProps {
    /// Labels of every step of the active flow, in order.
    pub steps: Vec<&'static str>,
    /// 0-based index of the step being shown.
    pub current: usize,
}

/// Numbered circles joined by lines; everything up to `current` is highlighted.
pub struct StepProgress;

impl Component for StepProgress {
    type Message = ();
    type Properties = StepProgressProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StepProgress
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let last = props.steps.len().saturating_sub(1);

        html! {
            <div class="step-container">
                { for props.steps.iter().enumerate().map(|(index, label)| {
                    let visited = index <= props.current;
                    html! {
                        <div key={index} class="step-wrapper">
                            <div class={classes!("step", visited.then_some("visited"))}>
                                <div class="circle">{ index + 1 }</div>
                                <div class="label">{ *label }</div>
                            </div>
                            if index < last {
                                <div class={classes!("line", (index < props.current).then_some("visited"))} />
                            }
                        </div>
                    }
                }) }
            </div>
        }
    }
}
