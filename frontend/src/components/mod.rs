mod barangay_search;
mod chart_frame;
mod dashboard;
mod icons;
mod month_buttons;
mod panels;
mod view_toggle;
mod year_navigator;

pub use barangay_search::BarangaySearch;
pub use dashboard::Dashboard;
pub use month_buttons::MonthButtons;
pub use panels::{GraphPanels, MonthSummaryCard, SearchResultPanel};
pub use view_toggle::ViewToggle;
pub use year_navigator::YearNavigator;
