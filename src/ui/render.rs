use crate::catalog::Product;
use crate::repository::LoadStatus;
use crate::ui::app::App;
use crate::ui::detail::{DetailState, Quantity};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, list_regions};
use crate::ui::route::Route;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE, RATING,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::List => draw_list(frame, app, body),
        Route::Product(_) => draw_detail(frame, app.detail_state(), app, body),
        Route::Favorites => draw_favorites(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);
}

fn bordered(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn centered_message(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(bordered(""))
}

fn favorite_marker(is_favorite: bool) -> Span<'static> {
    if is_favorite {
        Span::styled("♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ ", Style::default().fg(MUTED_TEXT))
    }
}

fn rating_span(product: &Product) -> Span<'static> {
    Span::styled(
        format!("★ {:.1} ({})", product.rating.rate, product.rating.count),
        Style::default().fg(RATING),
    )
}

fn product_item(product: &Product, is_favorite: bool) -> ListItem<'static> {
    let title = Line::from(vec![
        favorite_marker(is_favorite),
        Span::styled(
            product.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(product.display_price(), Style::default().fg(PRICE)),
        Span::raw("  "),
        rating_span(product),
        Span::raw("  "),
        Span::styled(format!("[{}]", product.category), Style::default().fg(MUTED_TEXT)),
    ]);
    let summary = Line::from(Span::styled(
        format!("  {}", product.summary()),
        Style::default().fg(MUTED_TEXT),
    ));
    ListItem::new(Text::from(vec![title, summary]))
}

fn draw_list(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let (filters, rows) = list_regions(body);
    let state = app.list_state();

    let search_style = if state.search_mode {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let cursor = if state.search_mode { "▏" } else { "" };
    let pending = if app.search_pending() { " …" } else { "" };
    let category = state.criteria.category.as_deref().unwrap_or("all");
    let filter_line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(format!("{}{}", state.search_input, cursor), search_style),
        Span::styled(pending, Style::default().fg(MUTED_TEXT)),
        Span::raw("   "),
        Span::styled("Category: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(category.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::raw("   "),
        Span::styled("Sort: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(state.criteria.sort.label(), Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(filter_line).block(bordered(" Filters ")), filters);

    let repository = app.repository();
    let has_products = !repository.products().is_empty();
    match repository.status() {
        LoadStatus::Loading if !has_products => {
            frame.render_widget(
                centered_message(vec![Line::from("Loading products...")]),
                rows,
            );
            return;
        }
        LoadStatus::Error if !has_products => {
            frame.render_widget(
                centered_message(vec![
                    Line::from(Span::styled(
                        "Failed to load products",
                        Style::default().fg(STATUS_ERROR),
                    )),
                    Line::from(""),
                    Line::from("Press r to try again."),
                ]),
                rows,
            );
            return;
        }
        _ => {}
    }

    let visible = app.visible_products();
    if visible.is_empty() {
        frame.render_widget(
            centered_message(vec![Line::from(
                "No products found. Try adjusting your search or filters.",
            )]),
            rows,
        );
        return;
    }

    let title = if repository.status() == LoadStatus::Error {
        Line::from(Span::styled(
            " Failed to load products, showing previous results ",
            Style::default().fg(STATUS_ERROR),
        ))
    } else {
        Line::from(format!(" Products ({}) ", visible.len()))
    };

    let favorites = app.favorites();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|p| product_item(p, favorites.is_favorite(p.id)))
        .collect();
    let list = List::new(items)
        .block(bordered(title))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, rows, &mut list_state);
}

fn quantity_line(quantity: Quantity) -> Line<'static> {
    let dim = Style::default().fg(MUTED_TEXT);
    let button = |label: &'static str, enabled: bool| {
        Span::styled(label, if enabled { Style::default().fg(ACCENT) } else { dim })
    };
    Line::from(vec![
        Span::raw("Quantity: "),
        button("[-]", quantity.get() > Quantity::MIN),
        Span::styled(
            format!(" {} ", quantity),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        button("[+]", quantity.get() < Quantity::MAX),
    ])
}

fn draw_detail(frame: &mut Frame<'_>, detail: &DetailState, app: &App, body: Rect) {
    let (product, quantity) = match detail {
        DetailState::Ready { product, quantity } => (product, *quantity),
        DetailState::Loading { .. } | DetailState::Closed => {
            frame.render_widget(centered_message(vec![Line::from("Loading product...")]), body);
            return;
        }
        DetailState::NotFound { .. } => {
            frame.render_widget(
                centered_message(vec![
                    Line::from(Span::styled(
                        "Product Not Found",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from("Press Esc to go back to the shop."),
                ]),
                body,
            );
            return;
        }
    };

    let is_favorite = app.favorites().is_favorite(product.id);
    let favorite_action = if is_favorite {
        Line::from(vec![
            Span::styled("♥ ", Style::default().fg(FAVORITE)),
            Span::raw("Remove from Favorites (Space)"),
        ])
    } else {
        Line::from(vec![
            Span::styled("♡ ", Style::default().fg(MUTED_TEXT)),
            Span::raw("Add to Favorites (Space)"),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.category.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                product.display_price(),
                Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            rating_span(product),
        ]),
        Line::from(""),
        Line::from(product.description.clone()),
        Line::from(""),
        quantity_line(quantity),
        Line::from(Span::styled("[ Add to Cart ]", Style::default().fg(ACCENT))),
        favorite_action,
        Line::from(""),
        Line::from(format!(
            "✓ Earn ${:.2} in Rewards points",
            product.reward_points()
        )),
        Line::from(Span::styled(
            format!("Image: {}", product.image),
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(bordered(format!(" Product #{} ", product.id)));
    frame.render_widget(widget, body);
}

fn draw_favorites(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let favorites = app.favorites();
    if favorites.is_empty() {
        frame.render_widget(
            centered_message(vec![
                Line::from(Span::styled(
                    "Your favorites list is empty",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Add some products to your favorites to see them here."),
            ]),
            body,
        );
        return;
    }

    let count = favorites.len();
    let title = format!(
        " My Favorites · {} {} ",
        count,
        if count == 1 { "item" } else { "items" }
    );
    let items: Vec<ListItem> = favorites
        .list()
        .iter()
        .map(|p| product_item(p, true))
        .collect();
    let list = List::new(items)
        .block(bordered(title))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default().with_selected(Some(app.favorites_screen().selected));
    frame.render_stateful_widget(list, body, &mut list_state);
}
