/// Table layer: core types, CSV I/O, and column editing.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │    io     │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered header, Vec<Vec<String>> rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   edit    │  clear / delete named columns → write back
///   └──────────┘
/// ```

pub mod edit;
pub mod io;
pub mod model;
