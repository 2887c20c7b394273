//! # Match Scorer
//!
//! Scores one talent record against a client's requirements by summing
//! fixed weights:
//!
//! | Criterion | Points |
//! |---|---|
//! | position found in category or any skill (case-insensitive) | 30 |
//! | experience level equal | 25 |
//! | location substring (case-insensitive) | 20 |
//! | availability equal | 15 |
//! | each skill containing a required-skill token | 10 |
//!
//! An empty requirement field contributes nothing, so empty requirements
//! score every record 0. The weights are business rules carried over as-is.

use ctal_core::{ClientRequirements, TalentRecord};

pub const POSITION_WEIGHT: u32 = 30;
pub const EXPERIENCE_WEIGHT: u32 = 25;
pub const LOCATION_WEIGHT: u32 = 20;
pub const AVAILABILITY_WEIGHT: u32 = 15;
/// Awarded per matching skill of the record, not per required token.
pub const SKILL_WEIGHT: u32 = 10;

/// Score `record` against `requirements`.
pub fn score(record: &TalentRecord, requirements: &ClientRequirements) -> u32 {
    let mut total = 0;

    if !requirements.position.is_empty() {
        let position = requirements.position.to_lowercase();
        if record.category.to_lowercase().contains(&position)
            || record
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&position))
        {
            total += POSITION_WEIGHT;
        }
    }

    if !requirements.experience_level.is_empty()
        && record.experience == requirements.experience_level
    {
        total += EXPERIENCE_WEIGHT;
    }

    if !requirements.location.is_empty()
        && record
            .location
            .to_lowercase()
            .contains(&requirements.location.to_lowercase())
    {
        total += LOCATION_WEIGHT;
    }

    if !requirements.availability.is_empty() && record.availability == requirements.availability {
        total += AVAILABILITY_WEIGHT;
    }

    let tokens = requirements.skill_tokens();
    if !tokens.is_empty() {
        let matched = record
            .skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                tokens.iter().any(|t| skill.contains(t.as_str()))
            })
            .count() as u32;
        total += matched * SKILL_WEIGHT;
    }

    total
}

/// Stable sort by `match_score`, highest first. Ties keep input order.
pub fn rank_by_score(talent: &mut [TalentRecord]) {
    talent.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

/// "Find Matches": rescore every record and rank the list.
pub fn find_matches(talent: &mut [TalentRecord], requirements: &ClientRequirements) {
    for record in talent.iter_mut() {
        record.match_score = score(record, requirements);
    }
    rank_by_score(talent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctal_core::{ApplicationId, TalentStatus};

    fn designer() -> TalentRecord {
        TalentRecord {
            id: ApplicationId::new(),
            seq: 1,
            name: "Ada Lovelace".into(),
            photo: None,
            location: "London, UK".into(),
            category: "UX/UI Design".into(),
            experience: "Advanced".into(),
            availability: "Immediate".into(),
            bio: "...".into(),
            skills: vec!["Figma".into()],
            portfolio: vec!["ada.dev".into()],
            email: "ada@x.com".into(),
            status: TalentStatus::Active,
            notes: String::new(),
            match_score: 0,
            last_contact: "2026-10-19".into(),
        }
    }

    fn named(name: &str, skills: &[&str]) -> TalentRecord {
        TalentRecord {
            name: name.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..designer()
        }
    }

    #[test]
    fn empty_requirements_score_zero() {
        assert_eq!(score(&designer(), &ClientRequirements::default()), 0);
    }

    #[test]
    fn design_requirements_score_sixty_five() {
        let q = ClientRequirements {
            position: "design".into(),
            experience_level: "Advanced".into(),
            skills: "figma".into(),
            ..Default::default()
        };
        assert_eq!(score(&designer(), &q), 30 + 25 + 10);
    }

    #[test]
    fn every_criterion_together() {
        let q = ClientRequirements {
            position: "ux".into(),
            experience_level: "Advanced".into(),
            location: "london".into(),
            availability: "Immediate".into(),
            skills: "fig".into(),
        };
        assert_eq!(score(&designer(), &q), 30 + 25 + 20 + 15 + 10);
    }

    #[test]
    fn position_can_match_a_skill() {
        let rec = named("Kemi", &["Motion Graphics"]);
        let q = ClientRequirements {
            position: "motion".into(),
            ..Default::default()
        };
        assert_eq!(score(&rec, &q), POSITION_WEIGHT);
    }

    #[test]
    fn experience_and_availability_are_case_sensitive() {
        let q = ClientRequirements {
            experience_level: "advanced".into(),
            availability: "immediate".into(),
            ..Default::default()
        };
        assert_eq!(score(&designer(), &q), 0);
    }

    #[test]
    fn skill_points_count_record_skills_not_tokens() {
        let rec = named("Sam", &["Adobe Photoshop", "Adobe Illustrator", "Blender"]);
        let q = ClientRequirements {
            skills: "adobe, photoshop".into(),
            ..Default::default()
        };
        // Photoshop matches two tokens but counts once; Illustrator matches "adobe".
        assert_eq!(score(&rec, &q), 2 * SKILL_WEIGHT);
    }

    #[test]
    fn trailing_comma_matches_every_skill() {
        let rec = named("Sam", &["Blender", "Maya"]);
        let q = ClientRequirements {
            skills: "blender,".into(),
            ..Default::default()
        };
        assert_eq!(score(&rec, &q), 2 * SKILL_WEIGHT);
    }

    #[test]
    fn empty_skills_award_no_skill_points() {
        let rec = named("Sam", &["Blender", "Maya"]);
        assert_eq!(score(&rec, &ClientRequirements::default()), 0);
    }

    #[test]
    fn find_matches_ranks_descending_and_keeps_tie_order() {
        let mut talent = vec![
            named("first-zero", &["Copywriting"]),
            named("figma-one", &["Figma"]),
            named("second-zero", &["SEO"]),
            named("figma-two", &["Figma", "FigJam"]),
        ];
        let q = ClientRequirements {
            skills: "fig".into(),
            ..Default::default()
        };
        find_matches(&mut talent, &q);

        let order: Vec<_> = talent.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["figma-two", "figma-one", "first-zero", "second-zero"]);
        assert_eq!(talent[0].match_score, 20);
        assert_eq!(talent[1].match_score, 10);
        assert_eq!(talent[2].match_score, 0);
    }

    #[test]
    fn rescoring_overwrites_previous_scores() {
        let mut talent = vec![designer()];
        talent[0].match_score = 99;
        find_matches(&mut talent, &ClientRequirements::default());
        assert_eq!(talent[0].match_score, 0);
    }
}
