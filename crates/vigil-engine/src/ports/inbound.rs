//! Inbound ports (driving): the API the engine exposes to UI/API consumers.
//!
//! Every operation takes the transport's [`CallerContext`] and begins at the
//! identity gate. Unless noted otherwise, an unresolved caller fails
//! `Unauthenticated` before any data access.

use vigil_store::CaseSearchFilter;
use vigil_types::{CaseId, CaseStatus, ProfileId, Role, SignalId, SignalStatus, UserId};

use crate::domain::errors::RegistryError;
use crate::domain::projections::{
    CaseDetail, CaseHit, CaseStats, CaseSummary, CurrentUser, SignalStats, SignalSummary, UserView,
};
use crate::domain::requests::{CaseListFilter, CreateCaseInput, CreateSignalInput, SignalListFilter};
use crate::ports::outbound::CallerContext;

/// Case lifecycle and retrieval.
pub trait CaseApi {
    /// Create a case: allocates a unique case number, sets status `draft`,
    /// zero-initializes the regulatory flags, and commits the row together
    /// with its creation workflow entry and `CREATE` audit entry.
    fn create_case(
        &self,
        ctx: &CallerContext,
        input: CreateCaseInput,
    ) -> Result<CaseId, RegistryError>;

    /// List cases, newest first, joined with display names.
    ///
    /// Only the first supplied filter in precedence order
    /// (`status > priority > assignedTo`) is applied. Results cap at the
    /// configured default (50) unless `limit` is passed.
    fn get_cases(
        &self,
        ctx: &CallerContext,
        filter: &CaseListFilter,
        limit: Option<usize>,
    ) -> Result<Vec<CaseSummary>, RegistryError>;

    /// One case with its full workflow history, timestamp descending.
    ///
    /// ## Errors
    /// - `CaseNotFound`
    fn get_case(&self, ctx: &CallerContext, id: &CaseId) -> Result<CaseDetail, RegistryError>;

    /// Change a case's status.
    ///
    /// Patches `status` and `lastModifiedBy`, appends one workflow entry
    /// and one `UPDATE_STATUS` audit entry; all three commit atomically.
    /// Authentication is the only gate on this path; no role check.
    ///
    /// ## Errors
    /// - `CaseNotFound`
    /// - `InvalidTransition` (strict policy only)
    fn update_case_status(
        &self,
        ctx: &CallerContext,
        id: &CaseId,
        new_status: CaseStatus,
        comments: Option<String>,
    ) -> Result<(), RegistryError>;

    /// Assign a case to a user.
    ///
    /// Patches `assignedTo` and `lastModifiedBy`, appends a workflow entry
    /// whose `toStatus` is the unchanged current status, and one `ASSIGN`
    /// audit entry.
    ///
    /// ## Errors
    /// - `CaseNotFound`
    /// - `UserNotFound` (target has no directory entry)
    fn assign_case(
        &self,
        ctx: &CallerContext,
        id: &CaseId,
        user_id: UserId,
    ) -> Result<(), RegistryError>;

    /// Full-text search over `adverseEvent`, composed with the supplied
    /// equality filters. Capped at the configured search limit (20); hits
    /// are not joined with display names.
    fn search_cases(
        &self,
        ctx: &CallerContext,
        term: &str,
        filter: &CaseSearchFilter,
    ) -> Result<Vec<CaseHit>, RegistryError>;

    /// Aggregate case statistics, recomputed by full scan.
    fn get_case_stats(&self, ctx: &CallerContext) -> Result<CaseStats, RegistryError>;
}

/// Signal recording and retrieval.
pub trait SignalApi {
    /// Record a detected signal (`detected` status) and its `CREATE_SIGNAL`
    /// audit entry.
    fn create_signal(
        &self,
        ctx: &CallerContext,
        input: CreateSignalInput,
    ) -> Result<SignalId, RegistryError>;

    /// List signals, newest first, joined with display names. Only the
    /// first supplied filter in precedence order
    /// (`status > strength > productName`) is applied. Uncapped.
    fn get_signals(
        &self,
        ctx: &CallerContext,
        filter: &SignalListFilter,
    ) -> Result<Vec<SignalSummary>, RegistryError>;

    /// Change a signal's status. Audited (`UPDATE_SIGNAL_STATUS`) but not
    /// recorded in any workflow ledger — signals have none.
    ///
    /// ## Errors
    /// - `SignalNotFound`
    fn update_signal_status(
        &self,
        ctx: &CallerContext,
        id: &SignalId,
        new_status: SignalStatus,
    ) -> Result<(), RegistryError>;

    /// Aggregate signal statistics, recomputed by full scan.
    fn get_signal_stats(&self, ctx: &CallerContext) -> Result<SignalStats, RegistryError>;
}

/// Profile management and identity-adjacent operations.
pub trait UserApi {
    /// The caller's account joined with their profile.
    ///
    /// Identity-bootstrapping path: returns `None` (not an error) when the
    /// caller cannot be resolved.
    fn get_current_user(&self, ctx: &CallerContext) -> Option<CurrentUser>;

    /// Create the caller's profile: the role table fixes the stored
    /// permission set, and a `CREATE_PROFILE` audit entry commits with it.
    ///
    /// ## Errors
    /// - `ProfileExists` (at most one profile per identity)
    fn create_user_profile(
        &self,
        ctx: &CallerContext,
        role: Role,
        department: String,
    ) -> Result<ProfileId, RegistryError>;

    /// Stamp the caller's `lastLogin`. Identity-bootstrapping path: a
    /// silent no-op when the caller cannot be resolved or has no profile.
    /// Not audited — an activity ping, not a data mutation.
    fn update_last_login(&self, ctx: &CallerContext);

    /// Every profile joined with its directory entry.
    ///
    /// ## Errors
    /// - `Forbidden` (caller lacks `manage_users`, or has no profile)
    fn get_all_users(&self, ctx: &CallerContext) -> Result<Vec<UserView>, RegistryError>;
}
