use nom::{
    bytes::complete::{take_till1, take_while},
    IResult,
};

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn surface(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Splits a line into surface tokens on runs of whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut input = line;
    let mut tokens = Vec::new();

    loop {
        let Ok((rest, _)) = separator(input) else {
            break;
        };
        input = rest;

        if input.is_empty() {
            break;
        }

        match surface(input) {
            Ok((rest, token)) => {
                tokens.push(token);
                input = rest;
            }
            Err(_) => break,
        }
    }

    tokens
}
