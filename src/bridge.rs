use crate::catalog::PlateCatalog;
use crate::family::Family;
use crate::generator::Generator;
use crate::preferences::Preferences;
use crate::search_config::SearchConfig;
use crate::weight_result::WeightResult;

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type PlateCatalog;
        type Preferences;
        type SearchConfig;
        type Generator;
        type WeightResult;
        type Family;

        #[swift_bridge(associated_to = PlateCatalog)]
        fn standard() -> PlateCatalog;
        fn len(self: &PlateCatalog) -> usize;
        fn bar_kg(self: &PlateCatalog) -> f64;
        fn plate_label(self: &PlateCatalog, index: usize) -> String;

        #[swift_bridge(init)]
        fn new(max_plates_per_side: usize, max_combos_per_total: usize) -> Preferences;
        #[swift_bridge(associated_to = Preferences)]
        fn standard() -> Preferences;
        fn push_heavy_label(self: &mut Preferences, label: &str);
        fn push_micro_label(self: &mut Preferences, label: &str);

        #[swift_bridge(init)]
        fn new(bar_kg: f64, min_total: f64, max_total: f64) -> SearchConfig;
        fn set_margin(self: &mut SearchConfig, margin: f64);
        fn set_cap(self: &mut SearchConfig, cap_per_weight: u32);
        fn set_family(self: &mut SearchConfig, family: Family);
        fn clear_family(self: &mut SearchConfig);

        #[swift_bridge(init)]
        fn new(catalog: PlateCatalog) -> Generator;
        fn generate(
            self: &Generator,
            config: &SearchConfig,
            prefs: &Preferences,
        ) -> Vec<WeightResult>;

        fn weight(self: &WeightResult) -> f64;
        fn min_plates(self: &WeightResult) -> usize;
        fn combo_count(self: &WeightResult) -> usize;
        fn combo_indices(self: &WeightResult, position: usize) -> Vec<usize>;

        #[swift_bridge(associated_to = Family)]
        fn kg() -> Family;
        #[swift_bridge(associated_to = Family)]
        fn lb() -> Family;
    }
}
