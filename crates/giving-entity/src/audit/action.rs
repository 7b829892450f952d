//! Audited admin action enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every action the admin back-office can record.
///
/// The set is closed; new back-office features must add a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    // Session / authentication
    AdminLogin,
    AdminLoginFailed,
    AdminLogout,
    AccessDenied,
    // Dashboard
    ViewDashboard,
    ViewStats,
    // Users
    ListUsers,
    ViewUser,
    BlockUser,
    UnblockUser,
    ChangeUserRole,
    UpdateUser,
    DeleteUser,
    ExportUsers,
    // Campaigns
    ListCampaigns,
    ViewCampaign,
    ChangeCampaignStatus,
    DeleteCampaign,
    // Donations
    ListDonations,
    ExportDonations,
    // Material donations and boutique
    ListMaterialDonations,
    ChangeMaterialDonationStatus,
    ListBoutiqueItems,
    ChangeBoutiqueItemStatus,
    // Content and configuration
    ViewContent,
    ViewSettings,
    // Logs
    ViewLogs,
    UnblockRateLimit,
}

/// Coarse grouping of actions, used for dashboard breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    Authentication,
    Dashboard,
    Users,
    Campaigns,
    Donations,
    MaterialDonations,
    Content,
    Logs,
}

impl AuditAction {
    /// All variants, in declaration order.
    pub const ALL: [AuditAction; 28] = [
        Self::AdminLogin,
        Self::AdminLoginFailed,
        Self::AdminLogout,
        Self::AccessDenied,
        Self::ViewDashboard,
        Self::ViewStats,
        Self::ListUsers,
        Self::ViewUser,
        Self::BlockUser,
        Self::UnblockUser,
        Self::ChangeUserRole,
        Self::UpdateUser,
        Self::DeleteUser,
        Self::ExportUsers,
        Self::ListCampaigns,
        Self::ViewCampaign,
        Self::ChangeCampaignStatus,
        Self::DeleteCampaign,
        Self::ListDonations,
        Self::ExportDonations,
        Self::ListMaterialDonations,
        Self::ChangeMaterialDonationStatus,
        Self::ListBoutiqueItems,
        Self::ChangeBoutiqueItemStatus,
        Self::ViewContent,
        Self::ViewSettings,
        Self::ViewLogs,
        Self::UnblockRateLimit,
    ];

    /// Actions surfaced in the security log even when they succeed.
    pub fn is_security_sensitive(&self) -> bool {
        matches!(
            self,
            Self::AdminLoginFailed | Self::AccessDenied | Self::DeleteUser | Self::ChangeUserRole
        )
    }

    /// The group this action belongs to.
    pub fn category(&self) -> AuditCategory {
        match self {
            Self::AdminLogin | Self::AdminLoginFailed | Self::AdminLogout | Self::AccessDenied => {
                AuditCategory::Authentication
            }
            Self::ViewDashboard | Self::ViewStats => AuditCategory::Dashboard,
            Self::ListUsers
            | Self::ViewUser
            | Self::BlockUser
            | Self::UnblockUser
            | Self::ChangeUserRole
            | Self::UpdateUser
            | Self::DeleteUser
            | Self::ExportUsers => AuditCategory::Users,
            Self::ListCampaigns
            | Self::ViewCampaign
            | Self::ChangeCampaignStatus
            | Self::DeleteCampaign => AuditCategory::Campaigns,
            Self::ListDonations | Self::ExportDonations => AuditCategory::Donations,
            Self::ListMaterialDonations
            | Self::ChangeMaterialDonationStatus
            | Self::ListBoutiqueItems
            | Self::ChangeBoutiqueItemStatus => AuditCategory::MaterialDonations,
            Self::ViewContent | Self::ViewSettings => AuditCategory::Content,
            Self::ViewLogs | Self::UnblockRateLimit => AuditCategory::Logs,
        }
    }

    /// Return the action as its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminLogin => "ADMIN_LOGIN",
            Self::AdminLoginFailed => "ADMIN_LOGIN_FAILED",
            Self::AdminLogout => "ADMIN_LOGOUT",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::ViewDashboard => "VIEW_DASHBOARD",
            Self::ViewStats => "VIEW_STATS",
            Self::ListUsers => "LIST_USERS",
            Self::ViewUser => "VIEW_USER",
            Self::BlockUser => "BLOCK_USER",
            Self::UnblockUser => "UNBLOCK_USER",
            Self::ChangeUserRole => "CHANGE_USER_ROLE",
            Self::UpdateUser => "UPDATE_USER",
            Self::DeleteUser => "DELETE_USER",
            Self::ExportUsers => "EXPORT_USERS",
            Self::ListCampaigns => "LIST_CAMPAIGNS",
            Self::ViewCampaign => "VIEW_CAMPAIGN",
            Self::ChangeCampaignStatus => "CHANGE_CAMPAIGN_STATUS",
            Self::DeleteCampaign => "DELETE_CAMPAIGN",
            Self::ListDonations => "LIST_DONATIONS",
            Self::ExportDonations => "EXPORT_DONATIONS",
            Self::ListMaterialDonations => "LIST_MATERIAL_DONATIONS",
            Self::ChangeMaterialDonationStatus => "CHANGE_MATERIAL_DONATION_STATUS",
            Self::ListBoutiqueItems => "LIST_BOUTIQUE_ITEMS",
            Self::ChangeBoutiqueItemStatus => "CHANGE_BOUTIQUE_ITEM_STATUS",
            Self::ViewContent => "VIEW_CONTENT",
            Self::ViewSettings => "VIEW_SETTINGS",
            Self::ViewLogs => "VIEW_LOGS",
            Self::UnblockRateLimit => "UNBLOCK_RATE_LIMIT",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
