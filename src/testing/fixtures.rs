use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::access::permissions::{
    MANAGE_CONTENT, MANAGE_SUBSCRIPTIONS, MANAGE_USERS, ROLE_ADMIN, ROLE_OWNER, VIEW_ANALYTICS,
};
use crate::dto::{
    BrandColors, EmailNotifications, OrganizationContext, PersonalizedRecommendations,
    PrivacySettings,
};
use crate::models::{
    Address, AssessmentRow, CommunityRow, ContentItemRow, OrganizationMembershipRow,
    OrganizationRow, UserAssessmentRow, UserProfileRow,
};

fn timestamp(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

pub fn organization_row() -> OrganizationRow {
    OrganizationRow {
        id: Uuid::new_v4(),
        name: "Test Church".to_string(),
        slug: "test-church".to_string(),
        description: Some("A test church".to_string()),
        website: Some("https://testchurch.org".to_string()),
        logo_url: Some("https://testchurch.org/logo.png".to_string()),
        organization_type: "church".to_string(),
        size_category: Some("medium".to_string()),
        contact_email: Some("contact@testchurch.org".to_string()),
        contact_phone: Some("+1-555-0123".to_string()),
        address: Some(Json(Address {
            street: Some("123 Main St".to_string()),
            city: Some("Anytown".to_string()),
            state: Some("CA".to_string()),
            country: Some("US".to_string()),
            postal_code: Some("12345".to_string()),
        })),
        license_type: Some("institutional".to_string()),
        max_users: Some(50),
        account_owner_id: Some(Uuid::new_v4()),
        billing_email: Some("billing@testchurch.org".to_string()),
        status: Some("active".to_string()),
        created_at: timestamp(1),
        updated_at: timestamp(2),
    }
}

pub fn membership_row() -> OrganizationMembershipRow {
    OrganizationMembershipRow {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        organization_id: Uuid::new_v4(),
        role: ROLE_ADMIN.to_string(),
        status: Some("active".to_string()),
        permissions: Some(Json(vec![
            MANAGE_USERS.to_string(),
            MANAGE_CONTENT.to_string(),
            VIEW_ANALYTICS.to_string(),
        ])),
        joined_at: Some(timestamp(3)),
        invited_at: Some(timestamp(2)),
        invited_by: Some(Uuid::new_v4()),
        created_at: timestamp(2),
        updated_at: timestamp(3),
    }
}

pub fn user_profile_row() -> UserProfileRow {
    UserProfileRow {
        id: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        display_name: Some("Pastor John".to_string()),
        bio: Some("Leading a church plant".to_string()),
        avatar_url: Some("https://example.com/avatar.png".to_string()),
        ministry_role: "senior_pastor".to_string(),
        denomination: Some("Baptist".to_string()),
        organization_name: Some("Test Church".to_string()),
        years_in_ministry: Some(15),
        country_code: Some("US".to_string()),
        timezone: Some("America/New_York".to_string()),
        language_primary: Some("en".to_string()),
        cultural_context: Some("western".to_string()),
        leader_tier: Some("core".to_string()),
        subscription_tier: Some("professional".to_string()),
        theological_focus: Some(vec!["missional".to_string(), "discipleship".to_string()]),
        brand_colors: Some(Json(BrandColors::default())),
        email_notifications: Some(Json(EmailNotifications::default())),
        privacy_settings: Some(Json(PrivacySettings::default())),
        onboarding_completed: Some(true),
        onboarding_step: Some(5),
        account_status: Some("active".to_string()),
        assessment_movement_alignment: Some(85),
        assessment_audience_engagement: Some(90),
        assessment_content_readiness: Some(75),
        assessment_revenue_potential: Some(80),
        assessment_strategic_fit: Some(88),
        assessment_total: Some(418),
        created_at: timestamp(1),
        updated_at: timestamp(4),
        last_active_at: Some(timestamp(5)),
    }
}

pub fn assessment_row() -> AssessmentRow {
    AssessmentRow {
        id: Uuid::new_v4(),
        name: "APEST Assessment".to_string(),
        slug: "apest-assessment".to_string(),
        description: Some("Five-fold ministry gifting".to_string()),
        assessment_type: "apest".to_string(),
        questions_count: 25,
        estimated_duration: Some(30),
        passing_score: Some(60),
        version: Some("2.0".to_string()),
        language: Some("en".to_string()),
        cultural_adaptation: Some("western".to_string()),
        research_backed: Some(true),
        validity_score: Some(Decimal::new(85, 2)),
        reliability_score: Some(Decimal::new(90, 2)),
        instructions: Some("Answer honestly".to_string()),
        scoring_method: Some("likert_5".to_string()),
        status: Some("active".to_string()),
        published_at: Some(timestamp(2)),
        created_at: timestamp(1),
        updated_at: timestamp(2),
    }
}

pub fn user_assessment_row() -> UserAssessmentRow {
    let mut raw = BTreeMap::new();
    raw.insert("apostolic".to_string(), 16.0);
    raw.insert("prophetic".to_string(), 19.0);

    UserAssessmentRow {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        assessment_id: Uuid::new_v4(),
        started_at: timestamp(3),
        completed_at: Some(timestamp(3)),
        completion_percentage: Some(100),
        raw_scores: Some(Json(raw.clone())),
        total_score: Some(48),
        max_possible_score: Some(60),
        apostolic_score: Some(80),
        prophetic_score: Some(95),
        evangelistic_score: Some(60),
        shepherding_score: Some(70),
        teaching_score: Some(75),
        normalized_scores: Some(Json(raw)),
        primary_gift: Some("prophetic".to_string()),
        secondary_gift: Some("apostolic".to_string()),
        response_consistency: Some(Decimal::new(92, 2)),
        completion_time: Some(25),
        confidence_level: Some(4),
        cultural_adjustment_applied: Some(false),
        cultural_adjustment_factor: Some(Decimal::ONE),
        ai_insights: None,
        personalized_recommendations: Some(Json(PersonalizedRecommendations {
            strengths: vec!["vision casting".to_string()],
            growth_areas: vec!["shepherding".to_string()],
            action_items: vec![],
            content_recommendations: vec![],
        })),
        suggested_peers: Some(Json(vec![Uuid::new_v4()])),
        complementary_gifts: Some(Json(vec!["shepherding".to_string()])),
        created_at: timestamp(3),
        updated_at: timestamp(3),
    }
}

/// Engagement counters are all null; tests set the ones they need
pub fn content_item_row() -> ContentItemRow {
    ContentItemRow {
        id: Uuid::new_v4(),
        title: "Test Content".to_string(),
        slug: "test-content".to_string(),
        excerpt: Some("A short excerpt".to_string()),
        content: Some("Full body text".to_string()),
        content_type: "article".to_string(),
        format: Some("text".to_string()),
        status: Some("published".to_string()),
        visibility: Some("public".to_string()),
        featured_image_url: Some("https://example.com/image.jpg".to_string()),
        video_url: None,
        audio_url: None,
        meta_title: Some("Test Content".to_string()),
        meta_description: Some("Test description".to_string()),
        original_source: None,
        license_type: Some("creative_commons".to_string()),
        primary_category_id: Some(Uuid::new_v4()),
        secondary_categories: Some(vec![Uuid::new_v4()]),
        tags: Some(vec!["leadership".to_string(), "ministry".to_string()]),
        theological_themes: Some(vec!["grace".to_string()]),
        author_id: Uuid::new_v4(),
        co_authors: Some(vec![]),
        word_count: Some(1200),
        estimated_reading_time: Some(6),
        view_count: None,
        like_count: None,
        share_count: None,
        comment_count: None,
        bookmark_count: None,
        series_id: None,
        series_order: None,
        network_amplification_score: None,
        cross_reference_count: None,
        ai_enhanced: Some(false),
        ai_summary: None,
        ai_key_points: None,
        attachments: None,
        canonical_url: None,
        scheduled_at: None,
        attribution_required: Some(true),
        published_at: Some(timestamp(2)),
        created_at: timestamp(1),
        updated_at: timestamp(2),
    }
}

pub fn community_row() -> CommunityRow {
    CommunityRow {
        id: Uuid::new_v4(),
        name: "Test Community".to_string(),
        slug: "test-community".to_string(),
        description: Some("A community for testing".to_string()),
        community_type: "leadership_development".to_string(),
        geographic_focus: Some(vec!["North America".to_string()]),
        cultural_context: Some("western".to_string()),
        language_primary: Some("en".to_string()),
        languages_supported: Some(vec!["en".to_string(), "es".to_string()]),
        visibility: Some("public".to_string()),
        join_approval_required: Some(true),
        max_members: Some(100),
        allow_guest_posts: Some(false),
        moderation_level: Some("strict".to_string()),
        current_member_count: Some(25),
        total_posts_count: Some(150),
        guidelines: Some("Be kind".to_string()),
        rules: Some(Json(vec!["No spam".to_string(), "Stay on topic".to_string()])),
        created_by: Uuid::new_v4(),
        created_at: timestamp(1),
        updated_at: timestamp(2),
    }
}

/// A context in a fresh organization with exactly the given permissions
pub fn organization_context(role: &str, permissions: &[&str]) -> OrganizationContext {
    let has = |p: &str| permissions.contains(&p);
    OrganizationContext {
        organization_id: Uuid::new_v4(),
        user_role: role.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        is_owner: role == ROLE_OWNER,
        is_admin: role == ROLE_OWNER || role == ROLE_ADMIN,
        can_manage_users: has(MANAGE_USERS),
        can_manage_content: has(MANAGE_CONTENT),
        can_view_analytics: has(VIEW_ANALYTICS),
        can_manage_subscriptions: has(MANAGE_SUBSCRIPTIONS),
    }
}
