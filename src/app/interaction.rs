use eframe::egui::Pos2;

use super::sim::{HOVER_RADIUS, Node};

/// Resolves a planet's links against the star collection, skipping any
/// dangling skill id, and returns the star centers to connect to.
pub(in crate::app) fn connector_endpoints(planet: &Node, stars: &[Node]) -> Vec<Pos2> {
    planet
        .links
        .iter()
        .filter_map(|link| stars.iter().find(|star| star.id == *link))
        .map(|star| star.pos)
        .collect()
}

/// Picks the navigation target for a click: every planet within the hit
/// radius whose URL is navigable matches, and the last match in traversal
/// order wins when planets overlap.
pub(in crate::app) fn click_target(planets: &[Node], click: Pos2) -> Option<&str> {
    let mut target = None;
    for planet in planets {
        if click.distance(planet.pos) < HOVER_RADIUS
            && let Some(url) = planet.url.as_deref()
        {
            target = Some(url);
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;
    use crate::app::sim::Viewport;
    use crate::universe::{ProjectRecord, SkillRecord};

    fn star(id: &str, x: f32, y: f32) -> Node {
        let record = SkillRecord {
            id: id.to_owned(),
            name: id.to_owned(),
            x: 0.0,
            y: 0.0,
            size: 4.0,
        };
        let mut node = Node::from_skill(&record, &Viewport::new(1000.0, 800.0));
        node.pos = pos2(x, y);
        node
    }

    fn planet(name: &str, x: f32, y: f32, links: &[&str], url: &str) -> Node {
        let record = ProjectRecord {
            name: name.to_owned(),
            x: 0.0,
            y: 0.0,
            size: 6.0,
            links: links.iter().map(|link| (*link).to_owned()).collect(),
            url: url.to_owned(),
        };
        let mut node = Node::from_project(&record, &Viewport::new(1000.0, 800.0));
        node.pos = pos2(x, y);
        node
    }

    #[test]
    fn dangling_links_are_skipped() {
        let stars = vec![star("skillA", 200.0, 200.0)];
        let hovered = planet("p", 400.0, 400.0, &["skillA", "skillX"], "#");

        let endpoints = connector_endpoints(&hovered, &stars);
        assert_eq!(endpoints, vec![pos2(200.0, 200.0)]);
    }

    #[test]
    fn connectors_resolve_every_existing_link() {
        let stars = vec![star("a", 100.0, 100.0), star("b", 300.0, 100.0)];
        let hovered = planet("p", 200.0, 300.0, &["a", "b"], "#");

        assert_eq!(
            connector_endpoints(&hovered, &stars),
            vec![pos2(100.0, 100.0), pos2(300.0, 100.0)]
        );
    }

    #[test]
    fn click_within_radius_navigates() {
        let planets = vec![planet("p", 500.0, 400.0, &[], "https://example.com")];

        assert_eq!(
            click_target(&planets, pos2(510.0, 400.0)),
            Some("https://example.com")
        );
        assert_eq!(click_target(&planets, pos2(530.0, 400.0)), None);
    }

    #[test]
    fn placeholder_url_never_navigates() {
        let planets = vec![planet("p", 500.0, 400.0, &[], "#")];
        assert_eq!(click_target(&planets, pos2(500.0, 400.0)), None);
    }

    #[test]
    fn overlapping_planets_resolve_last_match_wins() {
        let planets = vec![
            planet("first", 500.0, 400.0, &[], "https://example.com/first"),
            planet("second", 505.0, 400.0, &[], "https://example.com/second"),
        ];

        assert_eq!(
            click_target(&planets, pos2(502.0, 400.0)),
            Some("https://example.com/second")
        );
    }

    #[test]
    fn placeholder_overlap_falls_back_to_earlier_match() {
        let planets = vec![
            planet("first", 500.0, 400.0, &[], "https://example.com/first"),
            planet("second", 505.0, 400.0, &[], "#"),
        ];

        assert_eq!(
            click_target(&planets, pos2(502.0, 400.0)),
            Some("https://example.com/first")
        );
    }
}
