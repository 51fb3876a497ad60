//! Request and response types for the Confab admin API
//!
//! Field names follow the backend's JSON: camelCase for resource
//! payloads, snake_case for token grants.

use chrono::{DateTime, NaiveDate, Utc};
use confab_core::{MediaRef, SortOrder, UserProfile};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Authentication

/// Delivery channel for one-time passcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpChannel {
    Email,
    Phone,
}

/// Request an OTP to be sent to the given recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOtpParams {
    pub recipient: String,
    pub channel: OtpChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Exchange a delivered OTP for a token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpParams {
    pub recipient: String,
    pub channel: OtpChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub code: String,
}

/// Acknowledgement returned by `/auth/request-otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRequested {
    pub message: String,
}

/// Token pair issued by `/auth/verify-otp` and `/auth/refresh`;
/// the user profile accompanies an OTP verification only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Body of the refresh call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest {
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Events

/// Venue address of an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Media asset attached to an event floor plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanMedia {
    pub id: i64,
    pub file_name: String,
    pub url: String,
    pub asset_id: String,
    pub creator_id: String,
    pub provider: String,
}

/// Labelled floor plan belonging to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub id: i64,
    pub event_id: i64,
    pub media_id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub media: FloorPlanMedia,
}

/// Logo attached to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogo {
    pub id: i64,
    pub url: String,
}

/// An event managed through the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<EventLogo>,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<Vec<Sponsor>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plans: Option<Vec<FloorPlan>>,
}

// ---------------------------------------------------------------------------
// Sponsors

/// Sponsorship tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

/// A sponsor of the current event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: i64,
    pub name: String,
    pub sponsor_type: SponsorTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<MediaRef>,
}

/// Create a sponsor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSponsor {
    pub name: String,
    pub sponsor_type: SponsorTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<i64>,
}

/// Partial sponsor update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSponsor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_type: Option<SponsorTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// Sessions

/// Format of a scheduled session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Workshop,
    Talk,
    Panel,
}

/// Audience difficulty level of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Track a session belongs to, as embedded in session payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: i64,
    pub name: String,
}

/// Speaker as embedded in session payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// A scheduled session within an event's agenda
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSession {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub session_type: SessionKind,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location_id: i64,
    pub capacity: u32,
    pub difficulty_level: DifficultyLevel,
    pub speaker_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<SpeakerSummary>,
}

/// Create a session in an event's agenda
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventSession {
    pub title: String,
    pub description: String,
    pub session_type: SessionKind,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location_id: i64,
    pub capacity: u32,
    pub difficulty_level: DifficultyLevel,
    pub speaker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<i64>,
}

/// Filters accepted by the session list endpoint, serialized as query
/// parameters; unset fields are omitted
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_type: Option<SessionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ---------------------------------------------------------------------------
// Tracks

/// Session as embedded in track payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: i64,
    pub title: String,
}

/// A thematic track grouping sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionSummary>>,
}

/// Create a track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrack {
    pub name: String,
    pub description: String,
}

/// Partial track update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTrack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Locations

/// A physical room or space sessions are scheduled into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub floor: String,
    pub building: String,
}

/// Create a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub floor: String,
    pub building: String,
}

/// Partial location update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

// ---------------------------------------------------------------------------
// Users

/// Role record attached to a managed user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleInfo {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Company a user is affiliated with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<MediaRef>,
}

/// Sessions a user speaks at, as embedded in the user detail payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerSessionSummary {
    pub id: i64,
    pub title: String,
    pub session_type: SessionKind,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A platform user as seen by the admin screens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_banner: Option<MediaRef>,
    pub role: RoleInfo,
    #[serde(default)]
    pub profile_image: Option<MediaRef>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_sessions: Option<Vec<SpeakerSessionSummary>>,
}

// ---------------------------------------------------------------------------
// Check-ins

/// User details embedded in a check-in record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<MediaRef>,
}

/// A recorded attendee check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: i64,
    pub user_id: String,
    pub user: CheckInUser,
    pub created_at: DateTime<Utc>,
}

/// Today's check-in tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInCount {
    pub count: u64,
}

/// Filters accepted by the check-in list endpoint
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

// ---------------------------------------------------------------------------
// Media

/// What an uploaded file will be used as; the backend routes storage
/// and sizing by this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    UserProfileImage,
    EventLogo,
    CompanyLogo,
    SponsorLogo,
    SessionBanner,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserProfileImage => "USER_PROFILE_IMAGE",
            Self::EventLogo => "EVENT_LOGO",
            Self::CompanyLogo => "COMPANY_LOGO",
            Self::SponsorLogo => "SPONSOR_LOGO",
            Self::SessionBanner => "SESSION_BANNER",
        }
    }
}

/// Handle to a stored media asset returned by the upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaUpload {
    pub id: i64,
    pub url: String,
}
