use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    config::CATEGORIES,
    page::{ListItem, SectionKind},
    ui::{
        app::App,
        components::{file_list::FileList, header::Header, sidebar::Sidebar, spinner::Spinner},
        state::{Focus, HitMap},
    },
    util::colors,
};

const MENU_WIDTH: u16 = 26;
const TITLE: &str = "Materiais Didáticos";

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let app = self.app;
        let mut hits = HitMap::default();

        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let mobile = app.menu.is_mobile(area.width);
        let toggle = (app.menu.is_enabled() && mobile).then(|| app.menu.is_expanded());
        let header = Header::new(TITLE, toggle);
        hits.toggle = header.toggle_area(chunks[0]);
        f.render_widget(header, chunks[0]);

        let show_menu = !mobile || app.menu.is_expanded();
        let content_area = if show_menu {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(1)])
                .split(chunks[1]);

            let menu_block = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title("Navegação")
                .title_alignment(Alignment::Center);
            let menu_inner = menu_block.inner(main_chunks[0]);
            f.render_widget(menu_block, main_chunks[0]);

            let focused = (app.state.focus == Focus::Nav).then_some(app.state.nav_index);
            let sidebar = Sidebar::new(&app.page.links, focused);
            hits.links = sidebar.link_areas(menu_inner);
            hits.menu = Some(main_chunks[0]);
            f.render_widget(sidebar, menu_inner);

            main_chunks[1]
        } else {
            chunks[1]
        };

        let section = app.page.visible_section().cloned();
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(section.as_ref().map(|s| s.title.clone()).unwrap_or_default());
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        match section {
            Some(section) if section.kind == SectionKind::Category => {
                hits.list = Some(render_category(app, f, content_inner, &section.id));
            }
            Some(section) if section.kind == SectionKind::About => render_about(f, content_inner),
            _ => render_home(app, f, content_inner),
        }

        render_footer(app, f, chunks[2]);
        app.state.hits = hits;
    }
}

/// Draws search input, status line and list; returns the list area.
fn render_category(app: &mut App, f: &mut Frame, area: Rect, id: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let search_style = if app.state.focus == Focus::Search {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::NEUTRAL)
    };
    let value = app
        .page
        .search(&format!("search-{id}"))
        .map(|s| s.value.clone())
        .unwrap_or_default();
    let search = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("Buscar (/)")
            .border_style(search_style),
    );
    f.render_widget(search, chunks[0]);

    let shown = |region: &str| {
        app.page
            .is_hidden(&format!("{region}-{id}"))
            .is_ok_and(|hidden| !hidden)
    };
    if shown("loading") {
        let spinner = Spinner::default()
            .with_style(Style::default().fg(colors::PRIMARY))
            .with_label("Carregando arquivos...");
        f.render_widget(spinner, chunks[1]);
    } else if shown("error") {
        f.render_widget(
            Paragraph::new("Não foi possível carregar os arquivos.")
                .style(Style::default().fg(colors::DANGER)),
            chunks[1],
        );
    } else if shown("empty") {
        f.render_widget(
            Paragraph::new("Nenhum arquivo nesta pasta.").style(Style::default().fg(colors::NEUTRAL)),
            chunks[1],
        );
    }

    let entries = app.page.list(&format!("list-{id}")).unwrap_or_default();
    let focused = app.state.focus == Focus::List;
    f.render_stateful_widget(
        FileList::new(entries, focused),
        chunks[2],
        &mut app.state.list_state,
    );
    chunks[2]
}

fn render_home(app: &App, f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::styled(
            "Bem-vindo! Escolha uma disciplina no menu para ver os materiais.",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    for (id, title) in CATEGORIES {
        let files = app
            .page
            .list(&format!("list-{id}"))
            .map(|items| {
                items
                    .iter()
                    .filter(|i| matches!(i, ListItem::File(_)))
                    .count()
            })
            .unwrap_or(0);
        lines.push(Line::from(vec![
            Span::styled(format!("  {title}"), Style::default().fg(colors::PRIMARY)),
            Span::styled(
                format!("  {files} arquivo(s)"),
                Style::default().fg(colors::NEUTRAL),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_about(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::styled("Sobre nós", Style::default().add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::raw(
            "Materiais organizados por disciplina e publicados em pastas do Google Drive. \
             Cada lista mostra os arquivos mais recentes primeiro.",
        ),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

fn render_footer(app: &App, f: &mut Frame, area: Rect) {
    let text = app.state.status.clone().unwrap_or_else(|| {
        "Tab navegar · Enter abrir · / buscar · m menu · q sair".to_string()
    });
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colors::NEUTRAL)),
        area,
    );
}
