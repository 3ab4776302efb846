pub mod column_picker;
pub mod filter_panel;
pub mod sortable_header_cell;
pub mod view_state_block;

pub use column_picker::ColumnPicker;
pub use filter_panel::{FilterField, FilterPanel, FilterTag};
pub use sortable_header_cell::SortableHeaderCell;
pub use view_state_block::ViewStateBlock;
