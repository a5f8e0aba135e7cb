use leptos::prelude::*;

/// Визуальный акцент карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl CardTone {
    fn class(&self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Good => "stat-card stat-card--success",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Bad => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Already formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    tone: CardTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
