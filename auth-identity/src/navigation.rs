use crate::models::{NavItem, Role};

const DASHBOARD: NavItem = NavItem { label: "Dashboard", path: "/dashboard" };
const PATIENTS: NavItem = NavItem { label: "Patients", path: "/patients" };
const NEW_PATIENT: NavItem = NavItem { label: "New Patient", path: "/patients/onboard" };
const APPOINTMENTS: NavItem = NavItem { label: "Appointments", path: "/appointments" };
const RECORDS: NavItem = NavItem { label: "Medical Records", path: "/records" };
const BILLING: NavItem = NavItem { label: "Billing", path: "/billing" };
const INSURANCE: NavItem = NavItem { label: "Insurance", path: "/insurance" };
const COMPLIANCE: NavItem = NavItem { label: "Compliance", path: "/compliance" };
const ASSISTANT: NavItem = NavItem { label: "Assistant", path: "/assistant" };
const SETTINGS: NavItem = NavItem { label: "Settings", path: "/settings" };

/// Sidebar menu for a role
pub fn navigation_for(role: Role) -> Vec<NavItem> {
    match role {
        Role::Admin => vec![
            DASHBOARD, PATIENTS, APPOINTMENTS, BILLING, COMPLIANCE, ASSISTANT, SETTINGS,
        ],
        Role::Doctor => vec![DASHBOARD, PATIENTS, APPOINTMENTS, RECORDS, ASSISTANT],
        Role::Nurse => vec![DASHBOARD, PATIENTS, APPOINTMENTS, RECORDS],
        Role::Receptionist => vec![DASHBOARD, PATIENTS, NEW_PATIENT, APPOINTMENTS, ASSISTANT],
        Role::Billing => vec![DASHBOARD, BILLING, INSURANCE, COMPLIANCE],
    }
}

/// Whether a role's menu links to `path`
pub fn can_visit(role: Role, path: &str) -> bool {
    navigation_for(role).iter().any(|item| item.path == path)
}
