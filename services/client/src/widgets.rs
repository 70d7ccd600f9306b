//! Text widgets shared by the screens

use common::{
    catalog::BubblePoint,
    models::{Category, Movie, Rental},
    pagination::Pager,
};

/// Frame `body` with a title bar, the terminal counterpart of a modal dialog
pub fn modal(title: &str, body: &[String]) -> String {
    let width = body
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut lines = vec![border.clone(), format!("| {title:<width$} |"), border.clone()];
    lines.extend(body.iter().map(|line| format!("| {line:<width$} |")));
    lines.push(border);
    lines.join("\n")
}

/// Detail dialog of a movie
pub fn movie_modal(movie: &Movie) -> String {
    let categories = if movie.categories.is_empty() {
        "No categories available".to_string()
    } else {
        movie.categories.join(" | ")
    };

    let body = vec![
        categories,
        movie.description.clone(),
        format!("Rating: {} / 10", optional_number(movie.rating)),
        format!("Duration: {} min", optional_number(movie.duration)),
        format!("Poster: {}", movie.poster_url.as_deref().unwrap_or("none")),
        format!("Rent with: deus rent {}", movie.uuid),
    ];

    modal(&movie.title, &body)
}

/// One line per movie card
pub fn movie_list(movies: &[&Movie]) -> String {
    if movies.is_empty() {
        return "No movies found".to_string();
    }

    movies
        .iter()
        .map(|movie| format!("  {}  {}", movie.uuid, movie.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Category chips strip
pub fn category_chips(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    categories
        .iter()
        .map(|c| format!("[{}]", c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Page 2 / 5"
pub fn page_indicator(pager: &Pager) -> String {
    format!("Page {} / {}", pager.current(), pager.total())
}

/// Numbered page buttons with the active page in brackets
pub fn pagination_bar(pager: &Pager) -> String {
    pager
        .pages()
        .map(|page| {
            if page == pager.current() {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rentals table
///
/// The admin variant shows the renting user, the profile variant shows the
/// return action.
pub fn rentals_table(rentals: &[Rental], admin: bool) -> String {
    let mut header = vec!["Movie"];
    if admin {
        header.push("User");
    }
    header.extend(["Rental Date", "Return Date", "Paid", "Charge"]);
    if !admin {
        header.push("Return");
    }

    let mut rows = vec![header.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
    for rental in rentals {
        let mut row = vec![rental.movie.clone()];
        if admin {
            row.push(rental.user.clone().unwrap_or_default());
        }
        row.push(rental.rental_date.clone());
        row.push(
            rental
                .return_date
                .clone()
                .unwrap_or_else(|| "Not Returned".to_string()),
        );
        row.push(if rental.is_paid { "Yes" } else { "No" }.to_string());
        row.push(format!("${}", rental.charge.as_deref().unwrap_or("0")));
        if !admin {
            row.push(if rental.is_open() {
                format!("deus return {}", rental.uuid)
            } else {
                "Returned".to_string()
            });
        }
        rows.push(row);
    }

    if rentals.is_empty() {
        return format!("{}\nNo rentals found", render_rows(&rows));
    }
    render_rows(&rows)
}

/// Movies per publication year, one row per year
pub fn bubble_chart(points: &[BubblePoint]) -> String {
    let mut lines = vec!["Movies per Publication Year".to_string()];
    if points.is_empty() {
        lines.push("  no data".to_string());
    }
    lines.extend(
        points
            .iter()
            .map(|point| format!("  {} | {} {}", point.y, "o".repeat(point.x), point.x)),
    );
    lines.join("\n")
}

/// Wallet balance with two decimals
pub fn wallet(amount: f64) -> String {
    format!("${amount:.2}")
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn render_rows(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn rental(returned: bool) -> Rental {
        Rental {
            uuid: Uuid::nil(),
            movie: "Heat".to_string(),
            user: Some("ana".to_string()),
            rental_date: "2024-10-01".to_string(),
            return_date: returned.then(|| "2024-10-03".to_string()),
            is_paid: returned,
            charge: Some("3.00".to_string()),
        }
    }

    #[test]
    fn pagination_bar_marks_current_page() {
        let pager = Pager::from_count(2, 11, 5);
        assert_eq!(pagination_bar(&pager), "1 [2] 3");
        assert_eq!(page_indicator(&pager), "Page 2 / 3");
    }

    #[test]
    fn profile_table_offers_return_for_open_rentals() {
        let table = rentals_table(&[rental(false), rental(true)], false);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].ends_with("Return"));
        assert!(!lines[0].contains("User"));
        assert!(lines[1].contains("Not Returned"));
        assert!(lines[1].ends_with(&format!("deus return {}", Uuid::nil())));
        assert!(lines[2].ends_with("Returned"));
        assert!(lines[2].contains("$3.00"));
    }

    #[test]
    fn admin_table_shows_user() {
        let table = rentals_table(&[rental(false)], true);
        assert!(table.lines().next().unwrap().contains("User"));
        assert!(table.contains("ana"));
        assert!(rentals_table(&[], true).ends_with("No rentals found"));
    }

    #[test]
    fn movie_modal_without_categories() {
        let movie = Movie {
            uuid: Uuid::nil(),
            title: "Heat".to_string(),
            pub_date: Some(1995),
            duration: Some(170.0),
            rating: Some(8.3),
            description: "Crime saga".to_string(),
            categories: vec![],
            poster_url: None,
        };

        let modal = movie_modal(&movie);
        assert!(modal.contains("No categories available"));
        assert!(modal.contains("Rating: 8.3 / 10"));
        assert!(modal.contains("Duration: 170 min"));
    }

    #[test]
    fn modal_frames_title_and_body() {
        assert_eq!(
            modal("Hi", &["abc".to_string()]),
            "+-----+\n| Hi  |\n+-----+\n| abc |\n+-----+"
        );
        assert_eq!(
            bubble_chart(&[]),
            "Movies per Publication Year\n  no data"
        );
    }

    #[test]
    fn chips_and_chart() {
        assert_eq!(category_chips(&[]), "No categories found");
        assert_eq!(
            category_chips(&[Category { name: "Drama".into() }, Category { name: "Crime".into() }]),
            "[Drama] [Crime]"
        );

        let chart = bubble_chart(&[BubblePoint { x: 2, y: 1999, r: 6 }]);
        assert!(chart.ends_with("1999 | oo 2"));
        assert_eq!(wallet(12.5), "$12.50");
    }
}
