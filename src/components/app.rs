use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::TouchEvent;
use yew::prelude::*;

use super::{
    case_studies::CaseStudies, contact::Contact, drawer::Drawer, experts::Experts, footer::Footer,
    hero::Hero, nav_bar::NavBar, pricing::Pricing, services::Services, stats_band::StatsBand,
    technology::Technology,
};
use crate::content::Section;
use crate::state::{DrawerState, SwipeTracker, SwipeVerdict};
use crate::util;

// Delay between closing the drawer and starting the programmatic scroll, so
// the slide-out transition is not visually competing with the scroll jump.
const NAV_SCROLL_DELAY_MS: i32 = 300;
// Trailing quiet window after the last scroll event before heavy visual
// effects are re-enabled.
const SCROLL_QUIET_MS: i32 = 150;

/// Clears any outstanding deferred scroll, then schedules a new one. Only one
/// navigation can be in flight at a time.
fn schedule_deferred_scroll(pending: &Rc<RefCell<Option<i32>>>, section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(id) = pending.borrow_mut().take() {
        window.clear_timeout_with_handle(id);
    }
    let pending_inner = pending.clone();
    let cb = Closure::once_into_js(move || {
        pending_inner.borrow_mut().take();
        util::scroll_to_section(section.id());
    });
    if let Ok(id) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), NAV_SCROLL_DELAY_MS)
    {
        *pending.borrow_mut() = Some(id);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let drawer = use_state_eq(DrawerState::default);
    // Mirror handle for the touch closures, which are registered once at
    // mount and cannot capture a fresh state handle per render.
    let drawer_mirror = use_mut_ref(DrawerState::default);
    let pending_scroll = use_mut_ref(|| None::<i32>);

    // Reconcile the body scroll lock with drawer state on every transition.
    // The cleanup releases the lock unconditionally, so an unmount while the
    // drawer is open never leaves the page scroll-locked.
    {
        let drawer_mirror = drawer_mirror.clone();
        let current = *drawer;
        use_effect_with(current, move |_| {
            *drawer_mirror.borrow_mut() = current;
            util::set_body_scroll_lock(current.is_open());
            || util::set_body_scroll_lock(false)
        });
    }

    // Document-level edge-swipe recognizer.
    {
        let drawer = drawer.clone();
        let drawer_mirror = drawer_mirror.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

            let touch_start_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        tracker
                            .borrow_mut()
                            .begin(t0.client_x() as f64, t0.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_move_cb = {
                let tracker = tracker.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        tracker
                            .borrow_mut()
                            .update(t0.client_x() as f64, t0.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let tracker = tracker.clone();
                let drawer = drawer.clone();
                let drawer_mirror = drawer_mirror.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    // The decision uses the full start-to-end displacement,
                    // evaluated once per sequence.
                    let verdict = tracker.borrow().verdict(*drawer_mirror.borrow());
                    match verdict {
                        SwipeVerdict::OpenDrawer => drawer.set(DrawerState::Open),
                        SwipeVerdict::CloseDrawer => drawer.set(DrawerState::Closed),
                        SwipeVerdict::Stay => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };

            document
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            document
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            document
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            document
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            move || {
                let _ = document.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb);
            }
        });
    }

    // Scroll-activity flag: debounced, stays set for the whole burst plus the
    // quiet window. Stylesheets use it to cheapen effects while scrolling.
    use_effect_with((), move |_| {
        let window = web_sys::window().expect("no global `window` exists");
        let quiet_timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

        let quiet_cb = {
            let quiet_timer = quiet_timer.clone();
            Closure::wrap(Box::new(move || {
                quiet_timer.borrow_mut().take();
                util::set_scroll_activity(false);
            }) as Box<dyn FnMut()>)
        };
        let scroll_cb = {
            let window = window.clone();
            let quiet_timer = quiet_timer.clone();
            let quiet_fn: js_sys::Function = quiet_cb.as_ref().unchecked_ref::<js_sys::Function>().clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                util::set_scroll_activity(true);
                if let Some(id) = quiet_timer.borrow_mut().take() {
                    window.clear_timeout_with_handle(id);
                }
                if let Ok(id) = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&quiet_fn, SCROLL_QUIET_MS)
                {
                    *quiet_timer.borrow_mut() = Some(id);
                }
            }) as Box<dyn FnMut(_)>)
        };
        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .ok();

        move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            if let Some(id) = quiet_timer.borrow_mut().take() {
                window.clear_timeout_with_handle(id);
            }
            util::set_scroll_activity(false);
            let _keep_alive = (&scroll_cb, &quiet_cb);
        }
    });

    // Cancel a still-pending deferred scroll on unmount.
    {
        let pending_scroll = pending_scroll.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(id) = pending_scroll.borrow_mut().take() {
                    if let Some(window) = web_sys::window() {
                        window.clear_timeout_with_handle(id);
                    }
                }
            }
        });
    }

    let open_drawer = {
        let drawer = drawer.clone();
        Callback::from(move |_: ()| drawer.set(DrawerState::Open))
    };
    let close_drawer = {
        let drawer = drawer.clone();
        Callback::from(move |_: ()| drawer.set(DrawerState::Closed))
    };
    // Top-level navigation: scroll immediately, no drawer involved.
    let nav_scroll = Callback::from(move |section: Section| util::scroll_to_section(section.id()));
    // Drawer navigation: close now, scroll after the close transition.
    let drawer_nav = {
        let drawer = drawer.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |section: Section| {
            drawer.set(DrawerState::Closed);
            schedule_deferred_scroll(&pending_scroll, section);
        })
    };
    let book_call = Callback::from(move |_: ()| util::open_chat());
    let drawer_book_call = {
        let drawer = drawer.clone();
        Callback::from(move |_: ()| {
            drawer.set(DrawerState::Closed);
            util::open_chat();
        })
    };

    html! {
        <div class="app">
            <NavBar
                on_open_drawer={open_drawer}
                on_nav={nav_scroll.clone()}
                on_book_call={book_call.clone()}
            />
            <Drawer
                open={drawer.is_open()}
                on_close={close_drawer}
                on_nav={drawer_nav}
                on_book_call={drawer_book_call}
            />
            <Hero on_nav={nav_scroll.clone()} />
            <Services />
            <StatsBand />
            <Experts />
            <CaseStudies />
            <Pricing />
            <Technology />
            <Contact on_book_call={book_call} />
            <Footer on_nav={nav_scroll} />
        </div>
    }
}
