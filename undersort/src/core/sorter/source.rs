// src/core/sorter/source.rs
use crate::core::sorter::SortOptions;
use crate::models::{MethodType, Visibility};

const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Code,
    /// Inside brackets, a multi-line string, or after a trailing backslash.
    Continuation,
}

#[derive(Debug)]
struct SourceLine<'a> {
    text: &'a str,
    indent: usize,
    kind: LineKind,
}

impl SourceLine<'_> {
    fn code(&self) -> &str {
        self.text.trim()
    }

    fn is_code_at(&self, indent: usize) -> bool {
        self.kind == LineKind::Code && self.indent == indent
    }

    fn is_decorator(&self) -> bool {
        self.kind == LineKind::Code && self.code().starts_with('@')
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenString {
    quote: char,
    triple: bool,
}

/// Tracks the lexical state that carries over from one physical line to the next.
#[derive(Debug, Default)]
struct LineScanner {
    depth: usize,
    string: Option<OpenString>,
    backslash: bool,
}

impl LineScanner {
    const fn starts_logical_line(&self) -> bool {
        self.depth == 0 && self.string.is_none() && !self.backslash
    }

    fn consume(&mut self, line: &str) {
        let chars: Vec<char> = line.trim_end_matches(['\n', '\r']).chars().collect();
        let last = chars.len().saturating_sub(1);
        let mut escaped_newline = false;
        let mut i = 0;

        while let Some(&ch) = chars.get(i) {
            if let Some(open) = self.string {
                if ch == '\\' {
                    escaped_newline = i == last;
                    i += 2;
                    continue;
                }
                if ch == open.quote {
                    if !open.triple {
                        self.string = None;
                    } else if is_triple_quote(&chars, i, ch) {
                        self.string = None;
                        i += 3;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            match ch {
                '#' => break,
                '\'' | '"' => {
                    let triple = is_triple_quote(&chars, i, ch);
                    self.string = Some(OpenString { quote: ch, triple });
                    i += if triple { 3 } else { 1 };
                    continue;
                }
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                '\\' if i == last => escaped_newline = true,
                _ => {}
            }
            i += 1;
        }

        if self.string.is_some_and(|open| !open.triple) && !escaped_newline {
            self.string = None;
        }
        self.backslash = escaped_newline && self.string.is_none();
    }
}

fn is_triple_quote(chars: &[char], i: usize, quote: char) -> bool {
    chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote)
}

fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH - width % TAB_WIDTH,
            '\x0c' => width = 0,
            _ => break,
        }
    }
    width
}

fn scan_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut scanner = LineScanner::default();
    source
        .split_inclusive('\n')
        .map(|text| {
            let trimmed = text.trim();
            let kind = if !scanner.starts_logical_line() {
                LineKind::Continuation
            } else if trimmed.is_empty() {
                LineKind::Blank
            } else if trimmed.starts_with('#') {
                LineKind::Comment
            } else {
                LineKind::Code
            };
            scanner.consume(text);
            SourceLine {
                text,
                indent: indent_width(text),
                kind,
            }
        })
        .collect()
}

fn is_class_header(code: &str) -> bool {
    code.strip_prefix("class")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Extracts the function name from a `def` or `async def` line.
fn function_name(code: &str) -> Option<&str> {
    let code = code
        .strip_prefix("async")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map_or(code, str::trim_start);
    let rest = code.strip_prefix("def")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    rest.get(..end).filter(|name| !name.is_empty())
}

/// `@classmethod` -> `classmethod`, `@functools.cache(maxsize=1)` -> `functools.cache`.
fn decorator_name(code: &str) -> &str {
    let rest = code.trim_start_matches('@').trim_start();
    let end = rest
        .find(|c: char| c == '(' || c.is_whitespace() || c == '#')
        .unwrap_or(rest.len());
    rest.get(..end).unwrap_or(rest)
}

/// Index past the continuation lines that belong to the logical line at `start`.
fn logical_line_end(lines: &[SourceLine<'_>], start: usize) -> usize {
    let mut end = start + 1;
    while lines.get(end).is_some_and(|line| line.kind == LineKind::Continuation) {
        end += 1;
    }
    end
}

/// Index one past the last line of the class body that starts at `start`.
///
/// Trailing blank lines, and comments that are not indented past the class
/// header, are left outside the body.
fn class_body_end(lines: &[SourceLine<'_>], start: usize, header_indent: usize) -> usize {
    let mut end = start;
    while lines
        .get(end)
        .is_some_and(|line| line.kind != LineKind::Code || line.indent > header_indent)
    {
        end += 1;
    }

    while end > start {
        let Some(line) = lines.get(end - 1) else {
            break;
        };
        let outside = line.kind == LineKind::Blank
            || (line.kind == LineKind::Comment && line.indent <= header_indent);
        if !outside {
            break;
        }
        end -= 1;
    }
    end
}

type SortKey = (usize, usize);

#[derive(Debug)]
struct Member {
    /// `None` for anything that is not a method; such members are never moved.
    key: Option<SortKey>,
    text: String,
}

fn method_key(lines: &[SourceLine<'_>], indent: usize, options: &SortOptions) -> Option<SortKey> {
    let mut method_type = MethodType::Instance;
    for line in lines.iter().filter(|line| line.is_code_at(indent)) {
        if line.is_decorator() {
            if let Some(kind) = MethodType::from_decorator(decorator_name(line.code())) {
                method_type = kind;
            }
            continue;
        }

        let name = function_name(line.code())?;
        let visibility = Visibility::of_method_name(name);
        let visibility_rank = options
            .order
            .iter()
            .position(|v| *v == visibility)
            .unwrap_or(options.order.len());
        let type_rank = options
            .method_type_order
            .as_ref()
            .and_then(|order| order.iter().position(|t| *t == method_type))
            .unwrap_or(0);
        return Some((visibility_rank, type_rank));
    }
    None
}

/// Start index of every member of a class body whose statements sit at `indent`.
///
/// Decorators belong to the definition below them, and comments directly above
/// a member (no blank line in between) travel with it.
fn member_starts(body: &[SourceLine<'_>], indent: usize) -> Vec<usize> {
    let mut starts: Vec<usize> = Vec::new();
    let mut previous_was_decorator = false;

    for (index, line) in body.iter().enumerate() {
        if !line.is_code_at(indent) {
            continue;
        }
        if !previous_was_decorator {
            starts.push(index);
        }
        previous_was_decorator = line.is_decorator();
    }

    let mut floor = 0;
    for start in &mut starts {
        while *start > floor
            && body
                .get(*start - 1)
                .is_some_and(|line| line.kind == LineKind::Comment && line.indent == indent)
        {
            *start -= 1;
        }
        floor = *start + 1;
    }
    starts
}

fn sort_class_body(body: &[SourceLine<'_>], options: &SortOptions) -> String {
    let Some(indent) = body
        .iter()
        .find(|line| line.kind == LineKind::Code)
        .map(|line| line.indent)
    else {
        return render(body, options);
    };

    let starts = member_starts(body, indent);
    let Some(&first) = starts.first() else {
        return render(body, options);
    };

    let mut out = render(body.get(..first).unwrap_or_default(), options);
    let mut members: Vec<Member> = Vec::with_capacity(starts.len());
    let mut gaps: Vec<String> = Vec::with_capacity(starts.len());

    for (position, &start) in starts.iter().enumerate() {
        let end = starts.get(position + 1).copied().unwrap_or(body.len());
        // Trailing blanks and body-level comments not attached to the next
        // member form the gap, which stays in place.
        let mut content_end = end;
        while content_end > start + 1
            && body.get(content_end - 1).is_some_and(|line| {
                line.kind == LineKind::Blank
                    || (line.kind == LineKind::Comment && line.indent == indent)
            })
        {
            content_end -= 1;
        }

        let content = body.get(start..content_end).unwrap_or_default();
        members.push(Member {
            key: method_key(content, indent, options),
            text: render(content, options),
        });
        gaps.push(concat(body.get(content_end..end).unwrap_or_default()));
    }

    // Only runs of adjacent methods are reordered; other statements stay put.
    for run in members.chunk_by_mut(|a, b| a.key.is_some() && b.key.is_some()) {
        run.sort_by_key(|member| member.key);
    }

    for (member, gap) in members.iter().zip(&gaps) {
        out.push_str(&member.text);
        out.push_str(gap);
    }
    out
}

fn concat(lines: &[SourceLine<'_>]) -> String {
    lines.iter().map(|line| line.text).collect()
}

/// Re-emits `lines`, sorting the body of every class found along the way.
fn render(lines: &[SourceLine<'_>], options: &SortOptions) -> String {
    let mut out = String::new();
    let mut index = 0;

    while let Some(line) = lines.get(index) {
        if line.kind == LineKind::Code && is_class_header(line.code()) {
            let body_start = logical_line_end(lines, index);
            let body_end = class_body_end(lines, body_start, line.indent);
            out.push_str(&concat(lines.get(index..body_start).unwrap_or_default()));
            out.push_str(&sort_class_body(
                lines.get(body_start..body_end).unwrap_or_default(),
                options,
            ));
            index = body_end;
        } else {
            out.push_str(line.text);
            index += 1;
        }
    }
    out
}

/// Returns `source` with the methods of every class reordered.
///
/// Methods are ranked by visibility, then by method type when a method type
/// order is configured. Methods with equal rank keep their relative order, and
/// everything that is not a method keeps its position.
#[must_use]
pub fn sort_source(source: &str, options: &SortOptions) -> String {
    if source.is_empty() || source.ends_with('\n') {
        return render(&scan_lines(source), options);
    }

    // Give the last line the file's own line ending so it can move; strip it afterwards.
    let newline = if source
        .rsplit_once('\n')
        .is_some_and(|(head, _)| head.ends_with('\r'))
    {
        "\r\n"
    } else {
        "\n"
    };
    let padded = format!("{source}{newline}");
    let sorted = render(&scan_lines(&padded), options);
    match sorted.strip_suffix(newline) {
        Some(stripped) => stripped.to_owned(),
        None => sorted,
    }
}
