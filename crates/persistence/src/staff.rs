//! Staff roster

use concierge_core::StaffMember;

/// The fixed roster the dashboard can assign tasks to
pub fn default_roster() -> Vec<StaffMember> {
    vec![
        StaffMember::new("staff_hk_001", "Maria Rodriguez", "Housekeeping"),
        StaffMember::new("staff_mt_002", "David Chen", "Maintenance"),
        StaffMember::new("staff_rs_003", "Sarah Lee", "Room Service"),
        StaffMember::new("staff_fr_004", "Tom Jenkins", "Front Desk"),
    ]
}
