/// Data layer: core types, loading, filtering, and aggregates.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset  │  Vec<Penguin>, immutable
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │ summary  │  visible indices → count + means
///   └──────────┘      └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
