//! In-memory fake of the court portal for integration tests.
//!
//! Plays the role `wiremock` plays for HTTP scrapers: a scripted stand-in
//! for the remote side, so the full collection flow runs without a browser
//! or network. The fake models the portal as a set of page trees (search
//! form, result pages, detail pages) plus click behavior: submitting the
//! form lands on results page 1 (or the no-events page), clicking a pager
//! link swaps in the target results page, navigating a `LoadDocket` URL
//! swaps in that docket's detail page.
//!
//! Every interaction with side effects is appended to an event log so tests
//! can assert not just on results but on which remote interactions happened.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use ctdocket_scraper::browser::{BrowserSession, Locator, PageElement};
use ctdocket_scraper::{portal, ScrapeError};

// ---------------------------------------------------------------------------
// Tiny DOM
// ---------------------------------------------------------------------------

/// One element in a fake page tree. `text` is the element's own (top-level)
/// text; descendant text lives in `children`.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Node {
            tag: tag.to_string(),
            ..Node::default()
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    #[must_use]
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

fn matches(node: &Node, locator: &Locator) -> bool {
    match locator {
        Locator::Id(id) => node.attrs.get("id").map(String::as_str) == Some(id.as_str()),
        Locator::Tag(tag) => node.tag == *tag,
        Locator::Css(sel) => matches_css(node, sel),
    }
}

/// Supports exactly the selector forms the scraper uses: `[attr]`,
/// `tag[attr='value']`, `tag.class`, `#id`, and bare tags.
fn matches_css(node: &Node, sel: &str) -> bool {
    if let Some(rest) = sel.strip_prefix('[') {
        return node.attrs.contains_key(rest.trim_end_matches(']'));
    }
    if let Some((tag, attr_expr)) = sel.split_once('[') {
        let attr_expr = attr_expr.trim_end_matches(']');
        let Some((name, value)) = attr_expr.split_once('=') else {
            return false;
        };
        let value = value.trim_matches('\'').trim_matches('"');
        return (tag.is_empty() || node.tag == tag)
            && node.attrs.get(name).map(String::as_str) == Some(value);
    }
    if let Some((tag, class)) = sel.split_once('.') {
        let class_ok = node
            .attrs
            .get("class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class));
        return (tag.is_empty() || node.tag == tag) && class_ok;
    }
    if let Some(id) = sel.strip_prefix('#') {
        return node.attrs.get("id").map(String::as_str) == Some(id);
    }
    node.tag == sel
}

/// Depth-first collection of matching descendants (self excluded), in
/// document order.
fn collect_matches(node: &Node, locator: &Locator, out: &mut Vec<Node>) {
    for child in &node.children {
        if matches(child, locator) {
            out.push(child.clone());
        }
        collect_matches(child, locator, out);
    }
}

fn render_text(node: &Node) -> String {
    let mut parts = Vec::new();
    if !node.text.is_empty() {
        parts.push(node.text.clone());
    }
    for child in &node.children {
        let child_text = render_text(child);
        if !child_text.is_empty() {
            parts.push(child_text);
        }
    }
    parts.join("\n")
}

fn render_html(node: &Node) -> String {
    let attrs: String = node
        .attrs
        .iter()
        .map(|(k, v)| format!(" {k}=\"{v}\""))
        .collect();
    let inner = render_inner_html(node);
    format!("<{tag}{attrs}>{inner}</{tag}>", tag = node.tag)
}

fn render_inner_html(node: &Node) -> String {
    let mut out = String::new();
    for child in &node.children {
        out.push_str(&render_html(child));
    }
    out.push_str(&node.text);
    out
}

// ---------------------------------------------------------------------------
// Portal state and session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Search,
    Results(usize),
    NoEvents,
    Detail(String),
    Blank,
}

struct PortalState {
    search_page: Node,
    results_pages: Vec<Node>,
    detail_pages: HashMap<String, Node>,
    no_events: bool,
    screen: Screen,
    log: Vec<String>,
    typed_date: Option<String>,
}

/// Scripted portal double implementing [`BrowserSession`].
#[derive(Clone)]
pub struct FakePortal {
    state: Rc<RefCell<PortalState>>,
}

impl FakePortal {
    pub fn builder() -> PortalBuilder {
        PortalBuilder::default()
    }

    pub fn log(&self) -> Vec<String> {
        self.state.borrow().log.clone()
    }

    pub fn typed_date(&self) -> Option<String> {
        self.state.borrow().typed_date.clone()
    }

    fn current_root(&self) -> Node {
        let st = self.state.borrow();
        match &st.screen {
            Screen::Search => st.search_page.clone(),
            Screen::Results(index) => st
                .results_pages
                .get(*index)
                .cloned()
                .unwrap_or_else(|| Node::new("html")),
            Screen::NoEvents => Node::new("div").child(
                Node::new("span")
                    .attr("id", portal::NO_EVENTS_LABEL)
                    .text("No court events were found for the date entered."),
            ),
            Screen::Detail(docket_no) => st
                .detail_pages
                .get(docket_no)
                .cloned()
                .unwrap_or_else(|| Node::new("html")),
            Screen::Blank => Node::new("html"),
        }
    }
}

impl BrowserSession for FakePortal {
    type Element = FakeElement;

    async fn goto(&self, url: &str) -> Result<(), ScrapeError> {
        let mut st = self.state.borrow_mut();
        st.log.push(format!("goto:{url}"));
        if url.contains("CourtEventsSearchByDate.aspx") {
            st.screen = Screen::Search;
        } else if let Some(docket_no) = url.split("DocketNo=").nth(1) {
            st.screen = if st.detail_pages.contains_key(docket_no) {
                Screen::Detail(docket_no.to_string())
            } else {
                Screen::Blank
            };
        } else {
            st.screen = Screen::Blank;
        }
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<FakeElement, ScrapeError> {
        self.find_all(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ScrapeError::MissingElement {
                locator: locator.to_string(),
            })
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<FakeElement>, ScrapeError> {
        let root = self.current_root();
        let mut nodes = Vec::new();
        collect_matches(&root, locator, &mut nodes);
        Ok(nodes
            .into_iter()
            .map(|node| FakeElement {
                node,
                portal: self.clone(),
            })
            .collect())
    }
}

/// Snapshot of one element plus a handle back to the portal for click
/// side effects.
#[derive(Clone)]
pub struct FakeElement {
    node: Node,
    portal: FakePortal,
}

impl PageElement for FakeElement {
    async fn find(&self, locator: &Locator) -> Result<FakeElement, ScrapeError> {
        self.find_all(locator)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ScrapeError::MissingElement {
                locator: locator.to_string(),
            })
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<FakeElement>, ScrapeError> {
        let mut nodes = Vec::new();
        collect_matches(&self.node, locator, &mut nodes);
        Ok(nodes
            .into_iter()
            .map(|node| FakeElement {
                node,
                portal: self.portal.clone(),
            })
            .collect())
    }

    async fn text(&self) -> Result<String, ScrapeError> {
        Ok(render_text(&self.node))
    }

    async fn attr(&self, name: &str) -> Result<Option<String>, ScrapeError> {
        Ok(self.node.attrs.get(name).cloned())
    }

    async fn inner_html(&self) -> Result<String, ScrapeError> {
        Ok(render_inner_html(&self.node))
    }

    async fn click(&self) -> Result<(), ScrapeError> {
        let mut st = self.portal.state.borrow_mut();

        if let Some(href) = self.node.attrs.get("href") {
            if let Some(rest) = href.split("Page$").nth(1) {
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                if let Ok(page) = digits.parse::<usize>() {
                    st.log.push(format!("click:page{page}"));
                    st.screen = Screen::Results(page - 1);
                    return Ok(());
                }
            }
        }

        let id = self.node.attrs.get("id").map(String::as_str);
        if id == Some(portal::SUBMIT_BUTTON) {
            st.log.push("click:submit".to_string());
            st.screen = if st.no_events {
                Screen::NoEvents
            } else {
                Screen::Results(0)
            };
            return Ok(());
        }

        if self.node.tag == "option" {
            let value = self.node.attrs.get("value").cloned().unwrap_or_default();
            st.log.push(format!("select:{value}"));
            return Ok(());
        }

        st.log.push(format!("click:{}", id.unwrap_or(&self.node.tag)));
        Ok(())
    }

    async fn send_keys(&self, keys: &str) -> Result<(), ScrapeError> {
        let mut st = self.portal.state.borrow_mut();
        if self.node.attrs.get("id").map(String::as_str) == Some(portal::DATE_FIELD) {
            st.typed_date = Some(keys.to_string());
        }
        st.log.push(format!("type:{keys}"));
        Ok(())
    }

    async fn clear(&self) -> Result<(), ScrapeError> {
        let mut st = self.portal.state.borrow_mut();
        if self.node.attrs.get("id").map(String::as_str) == Some(portal::DATE_FIELD) {
            st.typed_date = None;
        }
        st.log.push("clear:date".to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Page fixtures
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PortalBuilder {
    results_pages: Vec<Node>,
    detail_pages: HashMap<String, Node>,
    no_events: bool,
}

impl PortalBuilder {
    /// Portal that answers the query with the no-events indicator.
    #[must_use]
    pub fn no_events(mut self) -> Self {
        self.no_events = true;
        self
    }

    /// Appends a results page listing the given docket numbers. Pager strips
    /// are rendered later by [`PortalBuilder::build`], once the page count is
    /// known.
    #[must_use]
    pub fn results_page(mut self, docket_nos: &[&str]) -> Self {
        self.results_pages.push(results_grid(docket_nos));
        self
    }

    /// Appends a pre-built results page, for markup-corruption scenarios.
    #[must_use]
    pub fn results_page_node(mut self, page: Node) -> Self {
        self.results_pages.push(page);
        self
    }

    /// Registers a detail page for a docket number. Dockets without one come
    /// up as a blank page, the way a dead `LoadDocket` URL renders.
    #[must_use]
    pub fn detail(
        mut self,
        docket_no: &str,
        case_type: &str,
        filed: &str,
        location: &str,
        parties: &[(&str, &str, &str)],
    ) -> Self {
        self.detail_pages
            .insert(docket_no.to_string(), detail_page(case_type, filed, location, parties));
        self
    }

    #[must_use]
    pub fn build(mut self) -> FakePortal {
        let total = self.results_pages.len();
        for (index, page) in self.results_pages.iter_mut().enumerate() {
            attach_pager(page, index + 1, total);
        }
        FakePortal {
            state: Rc::new(RefCell::new(PortalState {
                search_page: search_page(),
                results_pages: self.results_pages,
                detail_pages: self.detail_pages,
                no_events: self.no_events,
                screen: Screen::Blank,
                log: Vec::new(),
                typed_date: None,
            })),
        }
    }
}

fn search_page() -> Node {
    Node::new("form")
        .child(Node::new("input").attr("id", portal::DATE_FIELD).attr("type", "text"))
        .child(
            Node::new("select")
                .attr("id", portal::CATEGORY_DROPDOWN)
                .child(Node::new("option").attr("value", "CV").text("Civil"))
                .child(Node::new("option").attr("value", "FA").text("Family")),
        )
        .child(
            Node::new("input")
                .attr("id", portal::SUBMIT_BUTTON)
                .attr("type", "submit"),
        )
}

/// Results grid with alternately striped case rows, one link per row.
fn results_grid(docket_nos: &[&str]) -> Node {
    let mut grid = Node::new("table")
        .attr("id", portal::RESULTS_TABLE)
        .child(
            Node::new("tr")
                .attr("class", "grdHeader")
                .child(Node::new("th").text("Docket No"))
                .child(Node::new("th").text("Time")),
        );
    for (index, docket_no) in docket_nos.iter().enumerate() {
        let class = if index % 2 == 0 { "grdRow" } else { "grdRowAlt" };
        grid = grid.child(
            Node::new("tr")
                .attr("class", class)
                .child(
                    Node::new("td").child(
                        Node::new("a")
                            .attr("href", &format!("LoadDocket.aspx?DocketNo={docket_no}"))
                            .text(docket_no),
                    ),
                )
                .child(Node::new("td").text("10:00 AM")),
        );
    }
    Node::new("div").child(grid)
}

/// A results grid whose only case row is missing its docket link.
pub fn grid_with_linkless_row() -> Node {
    Node::new("div").child(
        Node::new("table")
            .attr("id", portal::RESULTS_TABLE)
            .child(Node::new("tr").attr("class", "grdHeader").child(Node::new("th")))
            .child(
                Node::new("tr")
                    .attr("class", "grdRow")
                    .child(Node::new("td").text("no link here")),
            ),
    )
}

/// Adds the pager strip to a results page. Single-page result sets get no
/// pager row at all; the current page renders as plain text, every other
/// page as a postback link.
fn attach_pager(page: &mut Node, page_no: usize, total_pages: usize) {
    if total_pages <= 1 {
        return;
    }
    let mut strip_row = Node::new("tr");
    for target in 1..=total_pages {
        let cell = if target == page_no {
            Node::new("td").child(Node::new("span").text(&target.to_string()))
        } else {
            Node::new("td").child(
                Node::new("a")
                    .attr(
                        "href",
                        &format!(
                            "javascript:__doPostBack('ctl00$ContentPlaceHolder1$gvCourtEventsResults','Page${target}')"
                        ),
                    )
                    .text(&target.to_string()),
            )
        };
        strip_row = strip_row.child(cell);
    }
    let pager = Node::new("tr").attr("class", "grdBorder").child(
        Node::new("td")
            .attr("colspan", "2")
            .child(Node::new("table").child(strip_row)),
    );
    // The grid is the page's first child.
    page.children[0] = page.children[0].clone().child(pager);
}

/// Detail page with the uneven label markup the extractor has to cope with:
/// the filing-date label nests a tooltip span ahead of its top-level date
/// text.
fn detail_page(
    case_type: &str,
    filed: &str,
    location: &str,
    parties: &[(&str, &str, &str)],
) -> Node {
    let mut table = Node::new("table")
        .attr("id", portal::PARTIES_TABLE)
        .child(
            Node::new("tr")
                .attr("class", "grdHeader")
                .child(Node::new("th").text("Party"))
                .child(Node::new("th").text("Attorney")),
        );
    for (index, (number, name, attorney)) in parties.iter().enumerate() {
        let prefix = format!("ctl00_ContentPlaceHolder1_gvParties_ctl{:02}_", index + 2);
        let mut row = Node::new("tr");
        if !number.is_empty() {
            row = row.child(
                Node::new("td").child(
                    Node::new("span")
                        .attr("id", &format!("{prefix}{}", portal::PARTY_NO_SUFFIX))
                        .text(number),
                ),
            );
        }
        if !name.is_empty() {
            row = row.child(
                Node::new("td").child(
                    Node::new("span")
                        .attr("id", &format!("{prefix}{}", portal::PARTY_NAME_SUFFIX))
                        .text(name),
                ),
            );
        }
        if !attorney.is_empty() {
            row = row.child(
                Node::new("td").child(
                    Node::new("span")
                        .attr("id", &format!("{prefix}{}", portal::ATTORNEY_SUFFIX))
                        .text(attorney),
                ),
            );
        }
        table = table.child(row);
    }

    Node::new("div")
        .child(
            Node::new("span")
                .attr("id", portal::CASE_TYPE_LABEL)
                .text(case_type),
        )
        .child(
            Node::new("span")
                .attr("id", portal::FILE_DATE_LABEL)
                .child(Node::new("span").attr("class", "tooltip").text("File Date"))
                .text(filed),
        )
        .child(
            Node::new("span")
                .attr("id", portal::LOCATION_LABEL)
                .text(location),
        )
        .child(table)
}
