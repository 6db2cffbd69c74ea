//! Dashboard showing a short preview of the hero roster.
//!
//! The dashboard asks its [`HeroService`] for every hero once, when it is
//! created, and keeps the second through fifth of them. A failed or
//! unanswered request leaves the dashboard empty.

use std::future::Future;
use std::ops::Range;
use std::pin::Pin;
use std::rc::Rc;

use leptos::*;

use crate::services::HeroService;
use crate::Hero;

/// Positions of the heroes shown on the dashboard.
pub const TOP_HEROES: Range<usize> = 1..5;

/// Keeps the heroes at [`TOP_HEROES`], clamped to what is available.
pub fn top_heroes(heroes: Vec<Hero>) -> Vec<Hero> {
    heroes
        .into_iter()
        .skip(TOP_HEROES.start)
        .take(TOP_HEROES.len())
        .collect()
}

/// Loads the dashboard's heroes.
///
/// Calls `assign` once with the top heroes when retrieval succeeds. Errors
/// are dropped and `assign` is never called.
pub async fn init_dashboard<S, F>(service: &S, assign: F)
where
    S: HeroService + ?Sized,
    F: FnOnce(Vec<Hero>),
{
    if let Ok(heroes) = service.get_heroes().await {
        assign(top_heroes(heroes));
    }
}

/// Creates the dashboard's hero list and starts loading it on the local
/// executor. The list stays empty until the service answers.
pub fn use_top_heroes(service: Rc<dyn HeroService>) -> ReadSignal<Vec<Hero>> {
    use_top_heroes_with(service, |load| spawn_local(load))
}

/// [`use_top_heroes`] with the executor supplied by the caller.
pub fn use_top_heroes_with<Sp>(service: Rc<dyn HeroService>, spawn: Sp) -> ReadSignal<Vec<Hero>>
where
    Sp: FnOnce(Pin<Box<dyn Future<Output = ()>>>),
{
    let (heroes, set_heroes) = create_signal(Vec::<Hero>::new());

    spawn(Box::pin(async move {
        init_dashboard(service.as_ref(), move |top| {
            log::debug!("Dashboard showing {} heroes", top.len());
            set_heroes.set(top);
        })
        .await;
    }));

    heroes
}

/// Key of a dashboard tile. Position first, so repeated ids still get
/// one tile each.
fn tile_key((index, hero): &(usize, Hero)) -> (usize, u32) {
    (*index, hero.id)
}

#[component]
pub fn HeroDashboard(service: Rc<dyn HeroService>) -> impl IntoView {
    let heroes = use_top_heroes(service);

    view! {
        <h3>"Top Heroes"</h3>
        <div class="grid grid-pad">
            <For
                each=move || heroes.get().into_iter().enumerate()
                key=tile_key
                children=move |(_, hero)| {
                    view! {
                        <div class="col-1-4">
                            <div class="module hero">
                                <h4>{hero.name}</h4>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
