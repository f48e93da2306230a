/// UI layer: sidebar controls, value boxes, scatter plot, data grid.
pub mod panels;
pub mod plot;
pub mod table;
