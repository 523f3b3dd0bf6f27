use std::rc::Rc;

use log::{error, warn};
use yew::prelude::*;

use crate::config::AutoplayConfig;
use crate::rotator::{GlooScheduler, Rotator, Testimonial, TimerEvent, MAX_RATING};

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: Rc<Vec<Testimonial>>,
    #[prop_or_default]
    pub config: AutoplayConfig,
}

pub enum TestimonialCarouselMsg {
    Next,
    Previous,
    Jump(usize),
    PointerEnter,
    PointerLeave,
    Timer(TimerEvent),
}

pub struct TestimonialCarousel {
    // None only when the hosting page handed us an empty list.
    rotator: Option<Rotator<GlooScheduler>>,
}

impl TestimonialCarousel {
    fn build(ctx: &Context<Self>) -> Option<Rotator<GlooScheduler>> {
        let props = ctx.props();
        let scheduler = GlooScheduler::new(ctx.link().callback(TestimonialCarouselMsg::Timer));
        match Rotator::new(props.testimonials.clone(), props.config, scheduler) {
            Ok(rotator) => Some(rotator),
            Err(e) => {
                error!("Testimonial carousel not mounted: {}", e);
                None
            }
        }
    }
}

impl Component for TestimonialCarousel {
    type Message = TestimonialCarouselMsg;
    type Properties = TestimonialCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            rotator: Self::build(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(rotator) = self.rotator.as_mut() else {
            return false;
        };
        match msg {
            TestimonialCarouselMsg::Next => {
                rotator.request_next();
                true
            }
            TestimonialCarouselMsg::Previous => {
                rotator.request_previous();
                true
            }
            TestimonialCarouselMsg::Jump(index) => match rotator.request_jump(index) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Ignoring jump: {}", e);
                    false
                }
            },
            TestimonialCarouselMsg::PointerEnter => {
                rotator.pointer_enter();
                true
            }
            TestimonialCarouselMsg::PointerLeave => {
                rotator.pointer_leave();
                true
            }
            TestimonialCarouselMsg::Timer(event) => rotator.on_timer(event),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // New content means a fresh instance; the old timer goes with it.
        if let Some(mut old) = self.rotator.take() {
            old.teardown();
        }
        self.rotator = Self::build(ctx);
        if let Some(rotator) = self.rotator.as_mut() {
            rotator.start();
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(rotator) = self.rotator.as_mut() {
                rotator.start();
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(rotator) = self.rotator.as_mut() {
            rotator.teardown();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(rotator) = self.rotator.as_ref() else {
            return html! {};
        };
        let link = ctx.link();
        let snapshot = rotator.snapshot();
        let testimonial = snapshot.testimonial;

        // Keying on the generation remounts the card, which restarts the CSS
        // animation and drops any slide still in progress.
        let (slide_class, slide_key) = match snapshot.transition {
            Some(t) => (Some(t.direction.css_class()), t.generation),
            None => (None, 0),
        };

        let stars = (1..=MAX_RATING)
            .map(|i| {
                let class = if i <= testimonial.rating.get() { "star filled" } else { "star" };
                html! { <span class={class}>{"★"}</span> }
            })
            .collect::<Html>();

        let dots = (0..snapshot.len)
            .map(|i| {
                let class = classes!("carousel-dot", (i == snapshot.index).then(|| "active"));
                html! {
                    <button
                        class={class}
                        aria-label={format!("Show testimonial {}", i + 1)}
                        onclick={link.callback(move |_| TestimonialCarouselMsg::Jump(i))}
                    />
                }
            })
            .collect::<Html>();

        let autoplay_label = if snapshot.is_auto_advancing { "Playing" } else { "Paused" };

        html! {
            <section
                class="testimonial-carousel"
                onmouseenter={link.callback(|_| TestimonialCarouselMsg::PointerEnter)}
                onmouseleave={link.callback(|_| TestimonialCarouselMsg::PointerLeave)}
            >
                <style>
                    {r#"
                        .testimonial-carousel {
                            max-width: 800px;
                            margin: 0 auto;
                            padding: 2rem;
                            position: relative;
                            overflow: hidden;
                        }
                        .testimonial-card {
                            background: rgba(30, 30, 30, 0.7);
                            border: 1px solid rgba(30, 144, 255, 0.1);
                            border-radius: 16px;
                            padding: 2rem;
                            text-align: left;
                        }
                        .slide-from-right {
                            animation: slideFromRight 0.5s ease-out;
                        }
                        .slide-from-left {
                            animation: slideFromLeft 0.5s ease-out;
                        }
                        @keyframes slideFromRight {
                            from { transform: translateX(40px); opacity: 0; }
                            to { transform: translateX(0); opacity: 1; }
                        }
                        @keyframes slideFromLeft {
                            from { transform: translateX(-40px); opacity: 0; }
                            to { transform: translateX(0); opacity: 1; }
                        }
                        .testimonial-content p {
                            color: #e0e0e0;
                            font-size: 1.1rem;
                            line-height: 1.6;
                            font-style: italic;
                        }
                        .star { color: #444; }
                        .star.filled { color: #FFC107; }
                        .author-name {
                            color: #7EB2FF;
                            font-weight: 600;
                        }
                        .author-title {
                            color: #999;
                            font-size: 0.9rem;
                        }
                        .carousel-controls {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 1rem;
                            margin-top: 1.5rem;
                        }
                        .carousel-dot {
                            width: 10px;
                            height: 10px;
                            border-radius: 50%;
                            border: none;
                            background: #555;
                            cursor: pointer;
                        }
                        .carousel-dot.active { background: #7EB2FF; }
                        .autoplay-state {
                            color: #777;
                            font-size: 0.8rem;
                        }
                        @media (max-width: 768px) {
                            .testimonial-card { padding: 1.5rem; }
                            .testimonial-content p { font-size: 1rem; }
                        }
                    "#}
                </style>
                <div key={slide_key.to_string()} class={classes!("testimonial-card", slide_class)}>
                    <div class="testimonial-rating">{stars}</div>
                    <div class="testimonial-content">
                        <p>{format!("\u{201C}{}\u{201D}", testimonial.quote_text)}</p>
                    </div>
                    <div class="testimonial-author">
                        <span class="author-name">{testimonial.author.clone()}</span>
                        <span class="author-title">{testimonial.role.clone()}</span>
                    </div>
                </div>
                <div class="carousel-controls">
                    <button
                        class="carousel-arrow"
                        aria-label="Previous testimonial"
                        onclick={link.callback(|_| TestimonialCarouselMsg::Previous)}
                    >
                        {"‹"}
                    </button>
                    {dots}
                    <button
                        class="carousel-arrow"
                        aria-label="Next testimonial"
                        onclick={link.callback(|_| TestimonialCarouselMsg::Next)}
                    >
                        {"›"}
                    </button>
                    <span class="autoplay-state">{autoplay_label}</span>
                </div>
            </section>
        }
    }
}
