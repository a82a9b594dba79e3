//! Hotel search result rendering

use super::escape::EscapePolicy;
use super::fragment::FormattedFragment;
use crate::travel::Hotel;

/// Separator placed between consecutive review blocks
pub const REVIEW_SPACER: &str = r#"<div class="review-space"></div>"#;

/// Render one card per hotel: name heading plus a linked thumbnail
///
/// Cards are concatenated without a separator. An empty list renders
/// as an empty fragment.
pub fn render_hotel_cards(hotels: &[Hotel], policy: EscapePolicy) -> FormattedFragment {
    let cards: String = hotels
        .iter()
        .map(|hotel| {
            let name = policy.apply(&hotel.name);
            let img = policy.apply(&hotel.img);
            format!(
                r#"<div><h4>{name}</h4><p><a href="{img}" target="_blank"><img class="hotel-img" src="{img}" alt="{name}" /></a></p></div>"#
            )
        })
        .collect();
    FormattedFragment::new(cards)
}

/// Render the reviews, one block per hotel, separated by [`REVIEW_SPACER`]
pub fn render_reviews(hotels: &[Hotel], policy: EscapePolicy) -> FormattedFragment {
    let reviews = hotels
        .iter()
        .map(|hotel| format!("<div><p>{}</p></div>", policy.apply(&hotel.review)))
        .collect::<Vec<_>>()
        .join(REVIEW_SPACER);
    FormattedFragment::new(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Hotel> {
        vec![
            Hotel::new("Pearl Continental", "https://img.example/pc.jpg", "Great view"),
            Hotel::new("Serena", "https://img.example/serena.jpg", "Quiet & clean"),
        ]
    }

    #[test]
    fn test_render_cards() {
        let hotels = sample();
        let cards = render_hotel_cards(&hotels[..1], EscapePolicy::Preserve);
        assert_eq!(
            cards.as_str(),
            r#"<div><h4>Pearl Continental</h4><p><a href="https://img.example/pc.jpg" target="_blank"><img class="hotel-img" src="https://img.example/pc.jpg" alt="Pearl Continental" /></a></p></div>"#
        );
    }

    #[test]
    fn test_cards_concatenated_without_separator() {
        let cards = render_hotel_cards(&sample(), EscapePolicy::Preserve);
        assert_eq!(cards.as_str().matches("<h4>").count(), 2);
        assert!(cards.as_str().contains("</div><div>"));
    }

    #[test]
    fn test_reviews_joined_by_spacer() {
        let reviews = render_reviews(&sample(), EscapePolicy::Preserve);
        assert_eq!(
            reviews.as_str(),
            format!("<div><p>Great view</p></div>{REVIEW_SPACER}<div><p>Quiet & clean</p></div>")
        );
    }

    #[test]
    fn test_single_review_has_no_spacer() {
        let hotels = sample();
        let reviews = render_reviews(&hotels[1..], EscapePolicy::Preserve);
        assert!(!reviews.as_str().contains("review-space"));
    }

    #[test]
    fn test_empty_results() {
        assert!(render_hotel_cards(&[], EscapePolicy::Preserve).is_empty());
        assert!(render_reviews(&[], EscapePolicy::Preserve).is_empty());
    }

    #[test]
    fn test_escape_policy_applies_to_fields() {
        let hotels = vec![Hotel::new("A<b>", "x\"y", "<i>ok</i>")];
        let cards = render_hotel_cards(&hotels, EscapePolicy::Escape);
        assert!(cards.as_str().contains("<h4>A&lt;b&gt;</h4>"));
        assert!(cards.as_str().contains(r#"href="x&quot;y""#));
        let reviews = render_reviews(&hotels, EscapePolicy::Escape);
        assert_eq!(reviews.as_str(), "<div><p>&lt;i&gt;ok&lt;/i&gt;</p></div>");
    }
}
