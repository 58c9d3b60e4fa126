pub mod algorithm;
pub mod cocktail_shaker;
pub mod comb;
pub mod config;
pub mod counting;
pub mod cycle;
pub mod delay;
pub mod gnome;
pub mod heap;
pub mod instrument;
pub mod metrics;
pub mod odd_even;
pub mod options;
pub mod test_config;
pub mod trace;

pub use algorithm::{Algorithm, Bounds, Category, Complexity, Info};
pub use cocktail_shaker::CocktailShakerSort;
pub use comb::CombSort;
pub use counting::{CountKey, CountingSort};
pub use cycle::CycleSort;
pub use gnome::GnomeSort;
pub use heap::HeapSort;
pub use instrument::Instrument;
pub use metrics::Metrics;
pub use odd_even::OddEvenSort;
pub use options::{OptionValue, Options};
pub use trace::{Direction, EventKind, TraceEvent};
