// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleListQuery, ArticleSort, PageRequest, StatusFilter},
        tag::TagName,
    },
};

/// Public index page size, from the original site.
pub const PUBLIC_PER_PAGE: u32 = 15;
/// Admin index page size.
pub const ADMIN_PER_PAGE: u32 = 25;

pub struct PublicListQuery {
    pub tag: Option<String>,
    pub page: u32,
}

pub struct AdminListQuery {
    pub status: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
    pub page: u32,
}

impl ArticleQueryService {
    /// Published articles only, newest first, optional tag filter.
    pub async fn list_public(&self, query: PublicListQuery) -> ApplicationResult<Page<ArticleDto>> {
        let page = PageRequest::new(query.page, PUBLIC_PER_PAGE);
        let list_query = ArticleListQuery {
            status: StatusFilter::Published,
            tag: normalize_tag_filter(query.tag),
            sort: ArticleSort::PublishedAtDesc,
            page,
        };
        self.run_listing(list_query).await
    }

    /// Admin index over all articles: status/tag filters, selectable
    /// sort, drafts sorted last under the default ordering.
    pub async fn list_admin(&self, query: AdminListQuery) -> ApplicationResult<Page<ArticleDto>> {
        let page = PageRequest::new(query.page, ADMIN_PER_PAGE);
        let list_query = ArticleListQuery {
            status: StatusFilter::parse(query.status.as_deref()),
            tag: normalize_tag_filter(query.tag),
            sort: ArticleSort::parse(query.sort.as_deref()),
            page,
        };
        self.run_listing(list_query).await
    }

    async fn run_listing(&self, query: ArticleListQuery) -> ApplicationResult<Page<ArticleDto>> {
        let now = self.clock.now();
        let (articles, total) = self.read_repo.list(&query, now).await?;
        let items = self.assemble(articles, now).await?;
        Ok(Page::new(items, query.page.page, query.page.per_page, total))
    }
}

/// Tag filters match case-insensitively by normalizing the same way tag
/// names are stored. An unparseable (blank) filter is no filter.
fn normalize_tag_filter(tag: Option<String>) -> Option<String> {
    tag.as_deref()
        .and_then(|raw| TagName::new(raw).ok())
        .map(TagName::into_inner)
}
