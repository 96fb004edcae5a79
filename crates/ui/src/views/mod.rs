mod dashboard;
mod picker;
mod screen;

pub use dashboard::DashboardView;
pub use picker::PickerView;
pub use screen::ScoreScreen;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
