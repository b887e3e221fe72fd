pub(super) const PROLOG: &str = r#"
#include <stdlib.h>
#include <stdio.h>
#include <string.h>
#include <signal.h>
#include <sys/wait.h>

#define CHUNK_SIZE 64

int run(const char *command)
{
    int status = system(command);
    if (WIFSIGNALED(status) && (WTERMSIG(status) == SIGINT || WTERMSIG(status) == SIGQUIT)) {
        exit(1);
    }
    if (WIFEXITED(status)) {
        return WEXITSTATUS(status);
    }
    return -1;
}

int diff(const char *first, const char *second)
{
    FILE *first_fd = fopen(first, "rb");
    FILE *second_fd = fopen(second, "rb");
    char first_chunk[CHUNK_SIZE];
    char second_chunk[CHUNK_SIZE];
    size_t first_bytes;
    size_t second_bytes;
    int result = 0;

    if (first_fd == NULL || second_fd == NULL) {
        result = 1;
        goto done;
    }

    for (;;) {
        first_bytes = fread(first_chunk, 1, CHUNK_SIZE, first_fd);
        second_bytes = fread(second_chunk, 1, CHUNK_SIZE, second_fd);

        if (first_bytes != second_bytes || memcmp(first_chunk, second_chunk, first_bytes) != 0) {
            result = 1;
            break;
        }
        if (first_bytes < CHUNK_SIZE) {
            break;
        }
    }

done:
    if (first_fd != NULL) {
        fclose(first_fd);
    }
    if (second_fd != NULL) {
        fclose(second_fd);
    }
    return result;
}

int main()
{
    int result;
"#;

pub(super) const EPILOG: &str = r#"
    return 0;
}
"#;
