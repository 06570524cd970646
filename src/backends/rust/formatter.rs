/// Collects the output fragments of a single grammar line.
///
/// A fragment is either a complete line (ending in `\n`) or a piece of the
/// line that is currently being built.
pub struct RustFormatter<'a> {
    fragments: Vec<String>,
    indentation: &'a str,
}

impl<'a> RustFormatter<'a> {
    pub fn new(indentation: &'a str) -> Self {
        Self {
            fragments: Vec::new(),
            indentation,
        }
    }
    
    /// Emit a complete line comment.
    pub fn comment<S: AsRef<str>>(&mut self, text: S) {
        self.fragments.push(format!("{}// {}\n", self.indentation, text.as_ref()));
    }
    
    /// Start a new line with an indented statement.
    pub fn statement<S: AsRef<str>>(&mut self, code: S) {
        self.fragments.push(format!("{}{}", self.indentation, code.as_ref()));
    }
    
    /// Append text to the current line as-is.
    pub fn append<S: Into<String>>(&mut self, text: S) {
        self.fragments.push(text.into());
    }
    
    pub fn end_line(&mut self) {
        self.fragments.push("\n".to_string());
    }
    
    pub fn finish(self) -> Vec<String> {
        self.fragments
    }
}
