/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    /// Builtin preset applied before timing.
    pub preset: &'static str,
    /// Quality tier index (0..=2).
    pub quality: i32,
    /// Animation time the sky is advanced to before sampling.
    pub time: f32,
}

/// Return the standard suite: each preset at the quality tier where its
/// distinguishing features are cheapest/most expensive to evaluate.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "clear-day-low",
            preset: "CLEAR_DAY",
            quality: 0,
            time: 4.0,
        },
        SceneConfig {
            name: "clear-day-medium",
            preset: "CLEAR_DAY",
            quality: 1,
            time: 4.0,
        },
        SceneConfig {
            name: "clear-day-high",
            preset: "CLEAR_DAY",
            quality: 2,
            time: 4.0,
        },
        SceneConfig {
            name: "overcast-high",
            preset: "OVERCAST",
            quality: 2,
            time: 4.0,
        },
        SceneConfig {
            name: "sunset-high",
            preset: "SUNSET",
            quality: 2,
            time: 11.0,
        },
        // Night is the stress case: the star walk dominates.
        SceneConfig {
            name: "night-high",
            preset: "NIGHT",
            quality: 2,
            time: 40.0,
        },
        SceneConfig {
            name: "hazy-summer-medium",
            preset: "HAZY_SUMMER",
            quality: 1,
            time: 4.0,
        },
    ]
}
