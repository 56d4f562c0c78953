//! Fire-and-forget celebratory animation on completion events. Purely
//! cosmetic: no retry, no completion signal, no state.

const EMOJIS: [&str; 4] = ["🎉", "🎊", "🎈", "🤓"];
const PARTICLE_COUNT: usize = 6;
const PARTICLE_LIFETIME_MS: i32 = 900;

/// Spawns a burst of emoji particles at a screen coordinate, falling back
/// to the viewport center when none is known. No-op outside the browser.
#[cfg(target_arch = "wasm32")]
pub fn celebrate(origin: Option<(f64, f64)>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let (x, y) = origin.unwrap_or_else(|| {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width / 2.0, height / 2.0)
    });

    for index in 0..PARTICLE_COUNT {
        let Ok(element) = document.create_element("span") else {
            continue;
        };
        let emoji = EMOJIS[index % EMOJIS.len()];
        element.set_text_content(Some(emoji));

        let jitter_x = (js_sys::Math::random() - 0.5) * 120.0;
        let jitter_y = (js_sys::Math::random() - 0.5) * 80.0;
        let Ok(particle) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let _ = particle.style().set_css_text(&format!(
            "position: fixed; left: {}px; top: {}px; pointer-events: none; \
             font-size: 1.5rem; z-index: 9999; \
             transition: transform {PARTICLE_LIFETIME_MS}ms ease-out, opacity {PARTICLE_LIFETIME_MS}ms ease-out;",
            x + jitter_x,
            y + jitter_y,
        ));
        let _ = body.append_child(&particle);

        // Kick the transition on the next tick, then drop the node.
        let animate = {
            let particle = particle.clone();
            Closure::once_into_js(move || {
                let _ = particle
                    .style()
                    .set_property("transform", "translateY(-80px) scale(0.5)");
                let _ = particle.style().set_property("opacity", "0");
            })
        };
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            animate.unchecked_ref(),
            16,
        );

        let cleanup = Closure::once_into_js(move || {
            particle.remove();
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cleanup.unchecked_ref(),
            PARTICLE_LIFETIME_MS,
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn celebrate(_origin: Option<(f64, f64)>) {}
