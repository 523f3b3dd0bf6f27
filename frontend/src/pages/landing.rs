use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::config::AutoplayConfig;
use crate::content;

#[function_component(Landing)]
pub fn landing() -> Html {
    let testimonials = use_memo(
        |_| match content::testimonials() {
            Ok(testimonials) => Some(Rc::new(testimonials)),
            Err(e) => {
                error!("Failed to load testimonials: {}", e);
                None
            }
        },
        (),
    );

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"Marketing that moves the numbers"}</h1>
                <p class="hero-subtitle">
                    {"SEO, social media, paid advertising and web design for teams who want results they can measure."}
                </p>
            </section>
            <section class="testimonials">
                <h2>{"What our clients say"}</h2>
                {
                    match &*testimonials {
                        Some(testimonials) => html! {
                            <TestimonialCarousel
                                testimonials={testimonials.clone()}
                                config={AutoplayConfig::default()}
                            />
                        },
                        None => html! {
                            <p class="testimonials-unavailable">{"Testimonials are unavailable right now."}</p>
                        },
                    }
                }
            </section>
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        color: #fff;
                        background: #1a1a1a;
                    }
                    .hero {
                        padding: 10rem 2rem 6rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        color: #999;
                        font-size: 1.2rem;
                        max-width: 640px;
                        margin: 1.5rem auto 0;
                    }
                    .testimonials {
                        padding: 6rem 2rem;
                        text-align: center;
                        background: linear-gradient(
                            to bottom,
                            rgba(30, 144, 255, 0.05),
                            transparent
                        );
                    }
                    .testimonials h2 {
                        font-size: 3rem;
                        margin-bottom: 3rem;
                    }
                    .testimonials-unavailable {
                        color: #999;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.2rem;
                        }
                        .testimonials {
                            padding: 4rem 1rem;
                        }
                        .testimonials h2 {
                            font-size: 2rem;
                            margin-bottom: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
