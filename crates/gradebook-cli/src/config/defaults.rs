use super::models::InterfaceKind;

pub struct DefaultsConfig {
    pub interface: InterfaceKind,
    pub sample_data: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            interface: InterfaceKind::Ask,
            sample_data: true,
        }
    }
}
