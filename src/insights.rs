//! Insight Formatter
//!
//! Fills the fixed reflection templates with the computed figures.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::allocation::PersonalTimeProjection;
use crate::metrics::{LifeKpis, LivedWeeksByStage};

const STAGE_REFLECTIONS: [&str; 5] = [
    "👶 0-5 años: Aprendiste a ser humano.",
    "👦 5-18 años: Formaste tu identidad.",
    "🧑 18-24 años: Exploraste tu independencia.",
    "👨 24-37 años: Construiste vínculos y carrera.",
    "🧘 37+: Tiempo de vivir con intención.",
];

const HOURS_PER_BOOK: f64 = 8.0;

/// Figures the templates draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightContext {
    pub percent_lived: f64,
    pub years_remaining: i64,
    pub weeks_remaining: i64,
    pub weeks_lived: i64,
    pub lived_weekends: i64,
    pub projection: Option<PersonalTimeProjection>,
}

impl InsightContext {
    pub fn new(kpis: &LifeKpis, lived: &LivedWeeksByStage) -> Self {
        Self {
            percent_lived: kpis.percent_lived,
            years_remaining: kpis.years_remaining,
            weeks_remaining: kpis.weeks_remaining,
            weeks_lived: kpis.weeks_lived,
            lived_weekends: lived.total(),
            projection: None,
        }
    }

    pub fn with_projection(mut self, projection: PersonalTimeProjection) -> Self {
        self.projection = Some(projection);
        self
    }
}

/// All insights in display order.
pub fn generate(ctx: &InsightContext) -> Vec<String> {
    let days = ctx.weeks_lived * 7;
    let weekends = ctx.lived_weekends;

    let mut insights = vec![
        format!(
            "🌟 Ya viviste el {:.2}% de tu vida. Aún te quedan {} años llenos de potencial.",
            ctx.percent_lived, ctx.years_remaining
        ),
        format!(
            "🎨 Cada punto en tu gráfico es una semana: una historia, una oportunidad. ¿Cómo vas a pintar las siguientes {} semanas?",
            ctx.weeks_remaining
        ),
        format!(
            "⌛ Si te quedan {} semanas, ¿cuántas dedicarás a lo verdaderamente importante?",
            ctx.weeks_remaining
        ),
        format!("📅 Viviste más de {} días desde que naciste.", days),
        format!("🌕 Sobreviviste a unas {} lunas llenas.", days.div_euclid(29)),
        format!(
            "😴 Estuviste despierto unos {} días completos (si dormiste 8 hs por día).",
            (days * 16).div_euclid(24)
        ),
        format!(
            "🍃 Disfrutaste al menos {} fines de semana: más de {} días de descanso.",
            weekends,
            weekends * 2
        ),
    ];
    insights.extend(STAGE_REFLECTIONS.iter().map(|s| s.to_string()));
    insights.push("📘 Si querés leer 30 libros antes de los 76, solo necesitás uno cada ~1.3 años.".to_string());
    insights.push(
        "🕒 Si dedicaras 1 hora semanal a un proyecto personal, en 20 años sumarías más de 1.000 horas.".to_string(),
    );

    if let Some(projection) = &ctx.projection {
        insights.extend(projection_insights(ctx.weeks_remaining, projection));
    }

    insights
}

/// The two lines drawn from the personal-time projection.
pub fn projection_insights(weeks_remaining: i64, projection: &PersonalTimeProjection) -> Vec<String> {
    vec![
        format!(
            "💪 Si dedicás solo 1 hora diaria a algo que amás, te quedan {} horas para eso.",
            weeks_remaining * 7
        ),
        format!(
            "📖 Podrías leer unos {} libros (asumiendo 8hs/libro).",
            (projection.total_personal_hours_remaining / HOURS_PER_BOOK).floor() as i64
        ),
    ]
}

/// `n` distinct insights in random order, or all of them when `n` is larger.
pub fn sample<R: Rng + ?Sized>(ctx: &InsightContext, n: usize, rng: &mut R) -> Vec<String> {
    let all = generate(ctx);
    all.choose_multiple(rng, n).cloned().collect()
}
