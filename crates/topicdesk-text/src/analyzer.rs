use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer, TokenStream};

const ENGLISH_STOP_WORDS: &[&str] = &[
	"a","about","above","across","after","afterwards","again","against","all","almost","alone","along","already","also","although","always","am","among","amongst","amoungst","amount","an","and","another","any","anyhow","anyone","anything","anyway","anywhere","are","around","as","at",
	"back","be","became","because","become","becomes","becoming","been","before","beforehand","behind","being","below","beside","besides","between","beyond","bill","both","bottom","but","by",
	"call","can","cannot","cant","co","con","could","couldnt","cry",
	"de","describe","detail","do","done","down","due","during",
	"each","eg","eight","either","eleven","else","elsewhere","empty","enough","etc","even","ever","every","everyone","everything","everywhere","except",
	"few","fifteen","fifty","fill","find","fire","first","five","for","former","formerly","forty","found","four","from","front","full","further",
	"get","give","go",
	"had","has","hasnt","have","he","hence","her","here","hereafter","hereby","herein","hereupon","hers","herself","him","himself","his","how","however","hundred",
	"i","ie","if","in","inc","indeed","interest","into","is","it","its","itself",
	"keep","last","latter","latterly","least","less","ltd",
	"made","many","may","me","meanwhile","might","mill","mine","more","moreover","most","mostly","move","much","must","my","myself",
	"name","namely","neither","never","nevertheless","next","nine","no","nobody","none","noone","nor","not","nothing","now","nowhere",
	"of","off","often","on","once","one","only","onto","or","other","others","otherwise","our","ours","ourselves","out","over","own",
	"part","per","perhaps","please","put",
	"rather","re",
	"same","see","seem","seemed","seeming","seems","serious","several","she","should","show","side","since","sincere","six","sixty","so","some","somehow","someone","something","sometime","sometimes","somewhere","still","such","system",
	"take","ten","than","that","the","their","them","themselves","then","thence","there","thereafter","thereby","therefore","therein","thereupon","these","they","thick","thin","third","this","those","though","three","through","throughout","thru","thus","to","together","too","top","toward","towards","twelve","twenty","two",
	"un","under","until","up","upon","us",
	"very","via",
	"was","we","well","were","what","whatever","when","whence","whenever","where","whereafter","whereas","whereby","wherein","whereupon","wherever","whether","which","while","whither","who","whoever","whole","whom","whose","why","will","with","within","without","would",
	"yet","you","your","yours","yourself","yourselves",
];

/// Lower-cased, stop-word filtered word tokens of at least two characters.
#[derive(Clone)]
pub struct Analyzer {
	inner: TextAnalyzer,
}

impl Default for Analyzer {
	fn default() -> Self {
		let inner = TextAnalyzer::builder(SimpleTokenizer::default())
			.filter(LowerCaser)
			.filter(StopWordFilter::remove(ENGLISH_STOP_WORDS.iter().map(|s| s.to_string())))
			.build();
		Self { inner }
	}
}

impl Analyzer {
	pub fn new() -> Self { Self::default() }

	pub fn tokenize(&self, text: &str) -> Vec<String> {
		// token_stream needs &mut; the analyzer is cheap to clone.
		let mut analyzer = self.inner.clone();
		let mut stream = analyzer.token_stream(text);
		let mut tokens = Vec::new();
		while stream.advance() {
			let token = &stream.token().text;
			if token.chars().count() >= 2 { tokens.push(token.clone()); }
		}
		tokens
	}
}

impl std::fmt::Debug for Analyzer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Analyzer").field("stop_words", &ENGLISH_STOP_WORDS.len()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drops_stop_words_and_short_tokens() {
		let tokens = Analyzer::new().tokenize("How do I calculate the ANNUAL salary, x 12?");
		assert_eq!(tokens, vec!["calculate", "annual", "salary", "12"]);
	}

	#[test]
	fn empty_text_has_no_tokens() {
		assert!(Analyzer::new().tokenize("").is_empty());
		assert!(Analyzer::new().tokenize("the of and").is_empty());
	}
}
