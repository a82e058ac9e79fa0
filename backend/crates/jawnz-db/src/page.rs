use std::fmt;

/// Sortable properties of a comment entity, keyed by their JSON name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    UserId,
    UserName,
    Content,
    CreatedAt,
}

impl SortField {
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "userId" => Some(Self::UserId),
            "userName" => Some(Self::UserName),
            "content" => Some(Self::Content),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn property(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::UserId => "userId",
            Self::UserName => "userName",
            Self::Content => "content",
            Self::CreatedAt => "createdAt",
        }
    }

    pub(crate) fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::UserId => "user_id",
            Self::UserName => "user_name",
            Self::Content => "content",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `asc` / `desc`
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if keyword.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.property(), self.direction.as_str())
    }
}

/// Zero-based page window with optional ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Vec<Sort>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// ORDER BY body. Columns come from the `SortField` whitelist only;
    /// insertion order breaks ties.
    pub(crate) fn order_by(&self) -> String {
        let mut terms: Vec<String> = self
            .sort
            .iter()
            .map(|s| format!("{} {}", s.field.column(), s.direction.as_sql()))
            .collect();
        terms.push(String::from("rowid ASC"));
        terms.join(", ")
    }
}

/// One page of results plus the total across all pages.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.size == 0 || self.total_elements <= 0 {
            return 0;
        }
        let size = i64::from(self.size);
        let pages = (self.total_elements + size - 1) / size;
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}
